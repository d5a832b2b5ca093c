use aurexis_model::{BlogPost, PortfolioProject, ProjectPatch, slugify, sort_blog_posts, sort_projects};
use aurexis_types::{DocumentId, Timestamp};
use serde_json::json;

fn project(id: &str, order: Option<i64>) -> PortfolioProject {
    PortfolioProject::from_patch(
        DocumentId::from(id),
        &ProjectPatch {
            order,
            ..Default::default()
        },
    )
}

#[test]
fn projects_sort_by_order_missing_last() {
    let mut projects = vec![project("a", Some(3)), project("b", Some(1)), project("c", None)];
    sort_projects(&mut projects);
    let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn project_sort_is_stable_on_ties() {
    let mut projects = vec![
        project("x", Some(1)),
        project("y", None),
        project("z", Some(1)),
        project("w", None),
    ];
    sort_projects(&mut projects);
    let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "z", "y", "w"]);
}

#[test]
fn blog_posts_sort_newest_first() {
    let post = |id: &str, millis: i64| {
        let created = Timestamp::from_millis(millis).unwrap().to_rfc3339();
        BlogPost::from_document(
            DocumentId::from(id),
            json!({"createdAt": created}).as_object().unwrap(),
        )
    };
    let mut posts = vec![post("t1", 1_000), post("t3", 3_000), post("t2", 2_000)];
    sort_blog_posts(&mut posts);
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t2", "t1"]);
}

#[test]
fn slugify_examples() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("  --AI  Automation 101--  "), "ai-automation-101");
    assert_eq!(slugify("Café au lait"), "caf-au-lait");
    assert_eq!(slugify("!!!"), "");
}
