use crewplan_db::models::MemberSkills;

/// Assemble the natural-language prompt for the planner: the requirements
/// text followed by one "name: skills" line per project member.
///
/// An empty roster produces an empty member block; the workflow still
/// proceeds in that case.
pub fn build_prompt(requirements: &str, members: &[MemberSkills]) -> String {
    let roster = members
        .iter()
        .map(|m| format!("{}: {}", m.name, m.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Project Requirements: {requirements}\nTeam Members and Skills:\n{roster}")
}
