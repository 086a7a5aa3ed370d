//! Dashboard placeholder content.
//!
//! The dashboard has no data flow: it always shows the same three panels
//! with empty-state copy.

/// One titled panel of dashboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPanel {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub panels: Vec<DashboardPanel>,
}

impl Dashboard {
    /// The fixed placeholder layout.
    ///
    /// # Examples
    /// ```
    /// use interview_console::domain::Dashboard;
    ///
    /// let dashboard = Dashboard::placeholder();
    /// assert_eq!(dashboard.panels[0].title, "Upcoming Interviews");
    /// ```
    pub fn placeholder() -> Self {
        Self {
            panels: vec![
                DashboardPanel {
                    title: "Upcoming Interviews",
                    lines: vec!["No upcoming interviews scheduled"],
                },
                DashboardPanel {
                    title: "Recent Activity",
                    lines: vec!["No recent activity"],
                },
                DashboardPanel {
                    title: "Quick Stats",
                    lines: vec![
                        "Total Interviews: 0",
                        "Questions in Bank: 0",
                        "Average Score: N/A",
                    ],
                },
            ],
        }
    }
}
