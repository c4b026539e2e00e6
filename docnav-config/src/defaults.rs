//! Built-in site navigation

use crate::types::{Entry, Sidebar, SidebarConfig};

/// Name of the sidebar shipped with the site
pub const DEFAULT_SIDEBAR: &str = "tutorialSidebar";

/// Build the site's sidebar configuration
pub fn build() -> SidebarConfig {
    SidebarConfig::new().with_sidebar(DEFAULT_SIDEBAR, tutorial_sidebar())
}

fn tutorial_sidebar() -> Sidebar {
    Sidebar::new(vec![
        category(
            "Getting Started",
            docs(&[
                "overview/system-overview",
                "overview/architecture-review",
                "overview/quick-start",
            ]),
        ),
        category("Backend Services", backend_items()),
        category("Frontend Apps", frontend_items()),
        category(
            "Mobile App",
            docs(&[
                "mobile/mechanics",
                "mobile/error-handling",
                "mobile/i18n",
                "mobile/branding",
            ]),
        ),
        category("@fitnexa/shared", docs(&["shared/overview"])),
        category(
            "Infrastructure",
            docs(&[
                "infrastructure/logging-observability",
                "infrastructure/single-domain-vercel",
                "infrastructure/uat-setup",
            ]),
        ),
        category(
            "Developer Guide",
            docs(&[
                "dev-workflows/contributing",
                "dev-workflows/monorepo-scripts",
                "dev-workflows/environment-setup",
            ]),
        ),
        category(
            "AI Governance",
            docs(&["ai-governance/guidelines", "ai-governance/decision-log"]),
        ),
        category(
            "Production Readiness",
            docs(&[
                "production-readiness/overview",
                "production-readiness/security",
                "production-readiness/stability",
                "production-readiness/observability-quality",
                "production-readiness/roadmap",
            ]),
        ),
        category("Features", docs(&["features/third-party-integration"])),
    ])
}

fn backend_items() -> Vec<Entry> {
    let mut items = docs(&[
        "backend/architecture",
        "backend/services-catalog",
        "backend/error-handling",
        "backend/testing",
    ]);
    items.push(category(
        "Service Guides",
        docs(&[
            "backend/services/gateway",
            "backend/services/identity-service",
            "backend/services/gym-service",
            "backend/services/content-service",
            "backend/services/nutrition-service",
            "backend/services/squad-service",
            "backend/services/messaging-service",
            "backend/services/logging-service",
            "backend/services/wizard-service",
        ]),
    ));
    items
}

fn frontend_items() -> Vec<Entry> {
    let mut items = docs(&[
        "frontend/overview",
        "frontend/api-client",
        "frontend/i18n",
        "frontend/testing",
    ]);
    items.push(category(
        "App Guides",
        docs(&[
            "frontend/apps/landing",
            "frontend/apps/gym-admin",
            "frontend/apps/super-admin",
            "frontend/apps/onboarding",
        ]),
    ));
    items
}

fn category(label: &str, items: Vec<Entry>) -> Entry {
    Entry::category(label, items)
}

fn docs(ids: &[&str]) -> Vec<Entry> {
    ids.iter().map(|id| Entry::doc(*id)).collect()
}
