use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeReport {
    #[serde(default)]
    pub results: Vec<TeamMember>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_entries: u32,
    #[serde(default)]
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub user_name: String,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub billable_hours: f64,
}
