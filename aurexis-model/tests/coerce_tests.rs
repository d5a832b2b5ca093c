use aurexis_model::coerce::{number, truthy};
use aurexis_model::{BlogPost, BlogPostStatus, Coerce, FaqItem, PortfolioProject, ProjectCategory, Testimonial};
use aurexis_model::{PricingPlan, RoiSlider, ServiceStat, SliderFormat, TeamMember};
use aurexis_model::{DEFAULT_AUTHOR, UNTITLED_POST};
use aurexis_types::DocumentId;
use serde_json::{Value, json};

fn fields(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn truthiness() {
    assert_eq!(truthy(&json!(null)), None);
    assert_eq!(truthy(&json!(true)), Some(true));
    assert_eq!(truthy(&json!(0)), Some(false));
    assert_eq!(truthy(&json!(2)), Some(true));
    assert_eq!(truthy(&json!("")), Some(false));
    assert_eq!(truthy(&json!("no")), Some(true));
    assert_eq!(truthy(&json!([])), Some(true));
}

#[test]
fn numbers_from_scalars() {
    assert_eq!(number(&json!(12)), Some(12.0));
    assert_eq!(number(&json!(" 7.5 ")), Some(7.5));
    assert_eq!(number(&json!("")), Some(0.0));
    assert_eq!(number(&json!("abc")), None);
    assert_eq!(number(&json!(true)), Some(1.0));
    assert_eq!(number(&json!({})), None);
}

#[test]
fn string_lists_drop_non_strings() {
    let list = Vec::<String>::coerce(&json!(["a", 1, null, {"x": 1}, "b"])).unwrap();
    assert_eq!(list, vec!["a", "1", "b"]);
    assert_eq!(Vec::<String>::coerce(&json!("a")), None);
}

#[test]
fn project_defaults_and_coercion() {
    let project = PortfolioProject::from_document(
        DocumentId::from("p1"),
        &fields(json!({
            "title": "Shop",
            "durationDays": "30",
            "featured": 1,
            "tech": "rust",
            "category": "nonsense",
            "order": "2",
        })),
    );
    assert_eq!(project.title, "Shop");
    assert_eq!(project.duration_days, 30);
    assert!(project.featured);
    assert!(project.tech.is_empty());
    assert_eq!(project.category, ProjectCategory::Web);
    assert_eq!(project.order, Some(2));
    assert!(project.showcase_images.is_empty());
}

#[test]
fn project_missing_order_stays_missing() {
    let project = PortfolioProject::from_document(DocumentId::from("p"), &fields(json!({})));
    assert_eq!(project.order, None);
    assert_eq!(project.duration_days, 0);
}

#[test]
fn blog_post_defaults() {
    let post = BlogPost::from_document(
        DocumentId::from("abc"),
        &fields(json!({"createdAt": "2025-01-01T00:00:00.000Z", "status": "archived"})),
    );
    assert_eq!(post.title, UNTITLED_POST);
    assert_eq!(post.slug, "abc");
    assert_eq!(post.author, DEFAULT_AUTHOR);
    assert_eq!(post.status, BlogPostStatus::Draft);
    assert_eq!(post.updated_at, post.created_at);
}

#[test]
fn blog_post_keeps_published_status() {
    let post = BlogPost::from_document(
        DocumentId::from("abc"),
        &fields(json!({"status": "published", "tags": ["ai"], "slug": "hello"})),
    );
    assert_eq!(post.status, BlogPostStatus::Published);
    assert_eq!(post.slug, "hello");
    assert_eq!(post.tags, vec!["ai"]);
}

#[test]
fn faq_and_testimonial_from_partial_documents() {
    let faq = FaqItem::from_document(DocumentId::from("f"), &fields(json!({"question": "Why?"})));
    assert_eq!(faq.question, "Why?");
    assert_eq!(faq.answer, "");

    let t = Testimonial::from_document(DocumentId::from("t"), &fields(json!({"rating": "4"})));
    assert_eq!(t.rating, 4);
    assert_eq!(t.name, "");
}

// ── Nested records ──────────────────────────────────────────────

#[test]
fn nested_stat_with_numeric_value_is_kept() {
    let stats = Vec::<ServiceStat>::coerce(&json!([
        {"label": "Hours saved", "value": 120},
        {"label": "Uptime", "value": "99.9%"},
        "not a stat",
    ]))
    .unwrap();
    assert_eq!(
        stats,
        vec![
            ServiceStat { label: "Hours saved".into(), value: "120".into() },
            ServiceStat { label: "Uptime".into(), value: "99.9%".into() },
        ]
    );
}

#[test]
fn nested_plan_coerces_each_field_on_its_own() {
    let plan = PricingPlan::coerce(&json!({
        "id": "growth",
        "name": "Growth",
        "priceValue": "4900",
        "bullets": "should be a list",
        "tags": ["popular", 3],
        "recommended": 1,
        "cta": {"label": "wrong shape"},
    }))
    .unwrap();
    assert_eq!(plan.id, "growth");
    assert_eq!(plan.price_value, Some(4900.0));
    assert!(plan.bullets.is_empty());
    assert_eq!(plan.tags, vec!["popular", "3"]);
    assert!(plan.recommended);
    assert_eq!(plan.cta, None);
}

#[test]
fn nested_slider_with_unknown_format_keeps_bounds() {
    let slider = RoiSlider::coerce(&json!({
        "id": "hours",
        "min": "1",
        "max": 40,
        "step": null,
        "format": "fortnights",
    }))
    .unwrap();
    assert_eq!(slider.min, 1.0);
    assert_eq!(slider.max, 40.0);
    assert_eq!(slider.step, 0.0);
    assert_eq!(slider.format, None::<SliderFormat>);
}

#[test]
fn nested_record_rejects_non_objects_only() {
    assert_eq!(TeamMember::coerce(&json!("Ada")), None);
    let member = TeamMember::coerce(&json!({"name": "Ada", "bio": false})).unwrap();
    assert_eq!(member.name, "Ada");
    assert_eq!(member.bio, "false");
}
