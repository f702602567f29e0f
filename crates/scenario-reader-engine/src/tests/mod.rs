use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{Chapter, ContentBlock, Scenario};

/// Create a temporary directory for scenario files
pub fn create_test_scenario_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file, including parent directories
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

pub fn chapter(id: &str, title: &str, category: &str) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        content: vec![],
    }
}

pub fn chapter_with(id: &str, content: Vec<ContentBlock>) -> Chapter {
    Chapter {
        content,
        ..chapter(id, id, "故事开始")
    }
}

pub fn scenario(chapters: Vec<Chapter>) -> Scenario {
    Scenario {
        title: "WANNA EAT MORE".to_string(),
        subtitle: Some("无尽食欲".to_string()),
        author: None,
        players: None,
        duration: None,
        categories: vec![],
        include: vec![],
        chapters,
    }
}
