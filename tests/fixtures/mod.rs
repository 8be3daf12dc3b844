// テストユーティリティ
// 統合テスト用のディレクトリツリー作成ヘルパー
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// 相対パスと内容の組からツリーを作成（中間ディレクトリは自動作成）
pub fn build_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (relative, content) in files {
        write_file(temp_dir.path(), relative, content);
    }
    temp_dir
}

/// ルート配下にファイルを1つ書き込む
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// ルート配下に空ディレクトリを作成
pub fn create_dir(root: &Path, relative: &str) {
    fs::create_dir_all(root.join(relative)).unwrap();
}

/// 典型的なシナリオ: a.txt=10, b.txt=20, sub/c.txt=oops, sub/d/ は空
pub fn scenario_tree() -> TempDir {
    let temp_dir = build_tree(&[("a.txt", "10"), ("b.txt", "20"), ("sub/c.txt", "oops")]);
    create_dir(temp_dir.path(), "sub/d");
    temp_dir
}

/// 1..=count の値を持つファイルを複数階層に分散して作成
pub fn numbered_tree(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for i in 1..=count {
        let relative = format!("level{}/group{}/n{:04}.txt", i % 3, i % 7, i);
        write_file(temp_dir.path(), &relative, &i.to_string());
    }
    temp_dir
}

/// 1..=count の総和
pub fn triangular(count: usize) -> i64 {
    (count * (count + 1) / 2) as i64
}
