//! Files grid - card columns of documents.

use crate::html_escape;
use crate::store::RequestStore;

struct FileCard {
    name: &'static str,
    size_mb: f32,
    owner: &'static str,
    modified: &'static str,
    tags: &'static [&'static str],
}

const FILES: &[FileCard] = &[
    FileCard {
        name: "quarterly-report.pdf",
        size_mb: 2.4,
        owner: "m.kowalski",
        modified: "Monday, 12 November, 2018",
        tags: &["Finance", "Reports"],
    },
    FileCard {
        name: "brand-assets.zip",
        size_mb: 48.0,
        owner: "a.nguyen",
        modified: "Thursday, 8 November, 2018",
        tags: &["Design"],
    },
    FileCard {
        name: "roadmap.xlsx",
        size_mb: 0.3,
        owner: "j.okafor",
        modified: "Friday, 2 November, 2018",
        tags: &["Product", "Planning", "Internal"],
    },
];

/// Render the files grid. `?sort=name` orders cards by file name.
pub fn files_grid(store: &RequestStore) -> String {
    let mut files: Vec<&FileCard> = FILES.iter().collect();
    if store.query_param("sort") == Some("name") {
        files.sort_by_key(|f| f.name);
    }

    let cards: String = files.into_iter().map(render_card).collect();

    format!(r#"<div class="card-columns">{cards}</div>"#)
}

fn render_card(file: &FileCard) -> String {
    let badges: String = file
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="badge badge-primary badge-pill mr-1">{}</span>"#,
                html_escape(tag)
            )
        })
        .collect();

    format!(
        r##"<div class="card">
    <div class="card-body">
        <h6 class="mb-2">{name}</h6>
        <span class="mb-2">{size:.1} Mb</span>
        <div>{owner}<br>{modified}</div>
    </div>
    <div class="card-footer">{badges}</div>
    <div class="card-footer d-flex">
        <a href="#" class="align-self-center">Details<i class="fa fa-fw fa-angle-right ml-1"></i></a>
    </div>
</div>"##,
        name = html_escape(file.name),
        size = file.size_mb,
        owner = html_escape(file.owner),
        modified = html_escape(file.modified),
    )
}
