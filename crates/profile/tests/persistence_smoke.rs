use nexr_engine::SkillSet;
use nexr_profile::{
    append_history, load_history, load_skills, save_history, save_skills, skills_file, CommitEntry,
};
use nexr_test_utils::{env_guard, ProfileFixture};

#[test]
fn skills_round_trip() {
    let _serial = env_guard();
    let fixture = ProfileFixture::new().unwrap();
    let _state = fixture.state_guard();

    assert!(load_skills().unwrap().is_empty());

    let mut skills = SkillSet::new();
    skills.insert("React");
    skills.insert("API Integration");
    save_skills(&skills).unwrap();

    let loaded = load_skills().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.contains("react"));
    assert!(loaded.contains("API Integration"));
}

#[test]
fn skills_file_is_a_plain_name_array() {
    let _serial = env_guard();
    let fixture = ProfileFixture::new().unwrap();
    let _state = fixture.state_guard();

    let mut skills = SkillSet::new();
    skills.insert("Testing");
    save_skills(&skills).unwrap();

    let raw = std::fs::read_to_string(skills_file().unwrap()).unwrap();
    let names: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(names, vec!["Testing".to_string()]);
}

#[test]
fn load_skills_reads_hand_written_files() {
    let _serial = env_guard();
    let fixture = ProfileFixture::new().unwrap();
    let _state = fixture.state_guard();
    fixture.write_skills(&["Rust", "Go"]).unwrap();

    let loaded = load_skills().unwrap();
    assert!(loaded.contains("rust"));
    assert!(loaded.contains("GO"));
}

#[test]
fn history_appends_and_keeps_only_recent_entries() {
    let _serial = env_guard();
    let fixture = ProfileFixture::new().unwrap();
    let _state = fixture.state_guard();

    assert!(load_history().unwrap().is_empty());

    for ts in 0..3 {
        append_history(CommitEntry {
            ts,
            session: format!("session-{ts}"),
            skills: vec!["React".into()],
        })
        .unwrap();
    }
    let loaded = load_history().unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].ts, 0);
    assert_eq!(loaded[2].session, "session-2");

    let overflow: Vec<CommitEntry> = (0..55)
        .map(|ts| CommitEntry {
            ts,
            session: "overflow".into(),
            skills: vec!["Testing".into()],
        })
        .collect();
    save_history(overflow).unwrap();
    let capped = load_history().unwrap();
    assert_eq!(capped.len(), 50);
    assert_eq!(capped[0].ts, 5);
    assert_eq!(capped[49].ts, 54);
}
