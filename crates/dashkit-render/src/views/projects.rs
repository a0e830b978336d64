//! Projects dashboard - task media list.

use crate::html_escape;
use crate::store::RequestStore;

struct Task {
    title: &'static str,
    due: &'static str,
    status: &'static str,
}

const TASKS: &[Task] = &[
    Task {
        title: "Wire up the billing export",
        due: "Mon, 12 Nov 2018",
        status: "danger",
    },
    Task {
        title: "Review onboarding copy",
        due: "Wed, 14 Nov 2018",
        status: "warning",
    },
    Task {
        title: "Rotate staging credentials",
        due: "Fri, 16 Nov 2018",
        status: "success",
    },
    Task {
        title: "Archive Q3 reports",
        due: "Tue, 20 Nov 2018",
        status: "muted",
    },
];

/// Render the projects dashboard.
pub fn projects_dashboard(_store: &RequestStore) -> String {
    let tasks: String = TASKS
        .iter()
        .enumerate()
        .map(|(i, task)| render_task(i, task))
        .collect();

    format!(
        r#"<div class="card mb-3">
    <div class="card-header">My Tasks</div>
    <ul class="list-group list-group-flush">
        {tasks}
    </ul>
</div>"#
    )
}

fn render_task(index: usize, task: &Task) -> String {
    format!(
        r#"<li class="list-group-item">
    <div class="media">
        <div class="media-left mr-3">
            <input type="checkbox" class="custom-control-input" id="task-{index}">
        </div>
        <div class="media-body">
            <div class="mt-0 mb-2"><a href="/apps/tasks/tasks-details">{title}</a></div>
            <div class="mb-0">{due}</div>
        </div>
        <div class="media-right ml-3">
            <i class="fa fa-fw fa-circle text-{status}"></i>
        </div>
    </div>
</li>"#,
        title = html_escape(task.title),
        due = html_escape(task.due),
        status = task.status,
    )
}
