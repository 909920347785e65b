use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl FileSpec {
    pub fn text(path: PathBuf, content: &str) -> Self {
        FileSpec::new(path, content.as_bytes().to_vec())
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

/// Random raw-like content: an object header followed by `token_count` tokens
pub fn generate_raw_content(token_count: usize) -> String {
    use fake::{Fake, faker::lorem::en::Word};

    let mut lines = vec![
        format!("{}_standard", Word().fake::<String>()),
        String::new(),
        "[OBJECT:CREATURE]".to_string(),
    ];

    for index in 0..token_count {
        let kind = Word().fake::<String>().to_uppercase();
        let value = Word().fake::<String>();
        lines.push(format!("\t[{}:{}:{}]", kind, index, value));
    }

    lines.join("\n")
}

/// Write the same generated files under both `a` and `b`
pub fn write_identical_trees(a: &Path, b: &Path, files_count: usize) -> Vec<PathBuf> {
    use fake::{Fake, faker::lorem::en::Word};

    (0..files_count)
        .map(|index| {
            let relative = PathBuf::from(format!("dir_{}", index % 2))
                .join(format!("{}_{}.txt", Word().fake::<String>(), index));
            let content = generate_raw_content((3..20).fake::<usize>());

            write_file(FileSpec::text(a.join(&relative), &content));
            write_file(FileSpec::text(b.join(&relative), &content));

            relative
        })
        .collect()
}
