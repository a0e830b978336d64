//! Dashboard views and their route table.
//!
//! Views render fixed fixture content; chunk names follow the bundler's
//! nested `Parent/Child` convention.

mod files;
mod projects;

pub use files::files_grid;
pub use projects::projects_dashboard;

use crate::html_escape;
use crate::routes::{LayoutProps, RouteTable};

/// Chunk names recorded by the bundled views.
pub mod chunk_names {
    pub const PROJECTS_DASHBOARD: &str = "Dashboards/Projects";
    pub const FILES_GRID: &str = "Apps/FilesGrid";
}

/// Sidebar navigation entries: (path, label, icon).
const NAV: &[(&str, &str, &str)] = &[
    ("/dashboards/projects", "Projects", "fa-th-large"),
    ("/apps/files/grid", "Files", "fa-folder-o"),
];

/// Route table for the dashboard.
pub fn dashboard_routes() -> RouteTable {
    RouteTable::new()
        .redirect("/", "/dashboards/projects")
        .redirect("/apps/files", "/apps/files/grid")
        .titled_page(
            "/dashboards/projects",
            "Projects",
            Some(chunk_names::PROJECTS_DASHBOARD),
            projects_dashboard,
        )
        .titled_page(
            "/apps/files/grid",
            "Files",
            Some(chunk_names::FILES_GRID),
            files_grid,
        )
        .with_layout(dashboard_layout)
}

/// Sidebar, navbar and content wrapper around a page.
pub fn dashboard_layout(props: &LayoutProps<'_>) -> String {
    let nav: String = NAV
        .iter()
        .map(|(path, label, icon)| {
            let active = if *path == props.pathname { " active" } else { "" };
            format!(
                r#"<li class="sidebar-menu__entry{active}"><a href="{path}"><i class="fa fa-fw {icon}"></i> {label}</a></li>"#
            )
        })
        .collect();

    let heading = props
        .title
        .map(|title| format!(r#"<h1 class="display-4 mb-4">{}</h1>"#, html_escape(title)))
        .unwrap_or_default();

    format!(
        r#"<div class="layout">
    <nav class="layout__sidebar">
        <div class="sidebar__brand">{brand}</div>
        <ul class="sidebar-menu">{nav}</ul>
    </nav>
    <div class="layout__wrap">
        <header class="layout__navbar"><span class="navbar-brand">{brand}</span></header>
        <div class="layout__content">
            {heading}
            {content}
        </div>
    </div>
</div>"#,
        brand = html_escape(&props.store.site_title),
        content = props.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RenderContext, ViewRenderer};

    #[test]
    fn test_root_redirects_to_projects() {
        let routes = dashboard_routes();
        let mut ctx = RenderContext::new("/", "Dashkit");

        let html = routes.render(&mut ctx).unwrap();

        assert_eq!(ctx.redirected_to(), Some("/dashboards/projects"));
        assert_eq!(ctx.chunks.names(), [chunk_names::PROJECTS_DASHBOARD]);
        assert!(html.contains("sidebar-menu__entry active"));
    }

    #[test]
    fn test_files_grid_page() {
        let routes = dashboard_routes();
        let mut ctx = RenderContext::new("/apps/files/grid", "Dashkit");

        let html = routes.render(&mut ctx).unwrap();

        assert!(ctx.redirected_to().is_none());
        assert_eq!(ctx.chunks.names(), [chunk_names::FILES_GRID]);
        assert!(html.contains("card-columns"));
        assert!(html.contains(">Files</h1>"));
    }

    #[test]
    fn test_layout_escapes_site_title() {
        let routes = dashboard_routes();
        let mut ctx = RenderContext::new("/dashboards/projects", "<Admin>");

        let html = routes.render(&mut ctx).unwrap();
        assert!(html.contains("&lt;Admin&gt;"));
        assert!(!html.contains("<Admin>"));
    }
}
