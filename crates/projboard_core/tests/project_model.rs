use projboard_core::{Project, ProjectId, ProjectStatus};

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Build API", "Backend service work", 3);
    project.id = ProjectId::from("11111111-2222-4333-8444-555555555555");
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Build API");
    assert_eq!(json["description"], "Backend service work");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "abc",
        "title": "Build API",
        "description": "Backend service work",
        "people": 3,
        "status": "archived"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(err.to_string().contains("archived"), "unexpected error: {err}");
}

#[test]
fn status_round_trips_through_names() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::parse(status.as_str()).unwrap(), status);
    }
    assert_eq!(ProjectStatus::ALL[0], ProjectStatus::Active);
}
