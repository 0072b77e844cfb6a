use listslot::model::{Project, UserProfile};
use listslot::{DocumentStore, InMemoryDocumentStore, PartialUpdate, RecordId, facade, store};
use serde_json::json;
use std::sync::Arc;

fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: "demo".to_string(),
        technologies: vec!["rust".to_string()],
        github_url: None,
        live_url: None,
        image_url: None,
    }
}

#[tokio::test]
async fn missing_document_reads_as_an_empty_list() {
    let docs = Arc::new(InMemoryDocumentStore::new());
    let projects = facade::projects_store(docs.clone(), "uid-1");

    assert!(projects.load().await.expect("load").is_empty());
    // The read must not create the document.
    assert_eq!(docs.get_document("info", "uid-1").await.unwrap(), None);
}

#[tokio::test]
async fn merged_field_save_round_trips() {
    let docs = Arc::new(InMemoryDocumentStore::new());
    let projects = facade::projects_store(docs, "uid-1");

    let list = vec![project("p1", "listslot"), project("p2", "catalog")];
    projects.save(&list).await.expect("save");

    assert_eq!(projects.load().await.expect("reload"), list);
}

#[tokio::test]
async fn saving_one_field_leaves_sibling_fields_unchanged() {
    let docs = Arc::new(InMemoryDocumentStore::new());

    // Seed unrelated fields of the owner document.
    docs.set_document_merged(
        "info",
        "uid-1",
        PartialUpdate::new()
            .set("username", json!("ada"))
            .set("skills", json!(["rust", "sql"])),
    )
    .await
    .expect("seed document");

    let projects = facade::projects_store(docs.clone(), "uid-1");
    projects
        .save(&[project("p1", "listslot")])
        .await
        .expect("save projects");

    let doc = docs
        .get_document("info", "uid-1")
        .await
        .unwrap()
        .expect("document exists");
    assert_eq!(doc.get("username"), Some(&json!("ada")));
    assert_eq!(doc.get("skills"), Some(&json!(["rust", "sql"])));
    assert!(doc.get("projects").is_some());
}

#[tokio::test]
async fn each_list_field_has_its_own_independent_store() {
    let docs = Arc::new(InMemoryDocumentStore::new());

    let projects = facade::projects_store(docs.clone(), "uid-1");
    let skills = facade::skills_store(docs.clone(), "uid-1");

    projects
        .save(&[project("p1", "listslot")])
        .await
        .expect("save projects");
    skills
        .save(&["rust".to_string(), "sql".to_string()])
        .await
        .expect("save skills");

    // Mutate skills; projects must be untouched.
    let current = skills.load().await.expect("load skills");
    let updated = store::remove_by_index(&current, 1).expect("drop sql");
    skills.save(&updated).await.expect("save updated skills");

    assert_eq!(skills.load().await.unwrap(), vec!["rust".to_string()]);
    assert_eq!(projects.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn remove_by_id_works_with_string_ids() {
    let docs = Arc::new(InMemoryDocumentStore::new());
    let projects = facade::projects_store(docs, "uid-1");

    let list = vec![project("p1", "listslot"), project("p2", "catalog")];
    projects.save(&list).await.expect("save");

    let loaded = projects.load().await.expect("load");
    let updated = store::remove_by_id(&loaded, &RecordId::from("p1"));
    projects.save(&updated).await.expect("save updated");

    let remaining = projects.load().await.expect("reload");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "p2");
}

#[tokio::test]
async fn profile_merge_preserves_the_list_fields() {
    let docs = Arc::new(InMemoryDocumentStore::new());

    let projects = facade::projects_store(docs.clone(), "uid-1");
    projects
        .save(&[project("p1", "listslot")])
        .await
        .expect("save projects");

    let profile = UserProfile {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        age: None,
        bio: Some("systems tinkerer".to_string()),
    };
    facade::merge_profile(docs.as_ref(), "uid-1", &profile)
        .await
        .expect("merge profile");

    let doc = docs
        .get_document("info", "uid-1")
        .await
        .unwrap()
        .expect("document exists");
    assert_eq!(doc.get("username"), Some(&json!("ada")));
    assert_eq!(doc.get("bio"), Some(&json!("systems tinkerer")));
    // `age` was unset, so the merge carried no such field.
    assert_eq!(doc.get("age"), None);
    assert_eq!(projects.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn generated_project_ids_carry_the_binding_prefix() {
    let docs = Arc::new(InMemoryDocumentStore::new());
    let projects = facade::projects_store(docs, "uid-1");

    match projects.new_id() {
        RecordId::Str(id) => assert!(id.starts_with("proj_")),
        RecordId::Int(_) => panic!("project ids are textual"),
    }
}
