//! ui::readme
//!
//! Pure README rendering.
//!
//! # Design
//!
//! Rendering is a pure function of the [`Settings`] record: no I/O, no
//! clock, no environment. The same settings always yield byte-identical
//! output.
//!
//! # Example Output
//!
//! ````markdown
//! # widget
//!
//! Makes widgets
//!
//! ## Features
//!
//! - Fast
//! - Small
//!
//! ## Installation
//!
//! ```bash
//! cargo install widget
//! ```
//!
//! ## Usage
//!
//! ```bash
//! widget --help
//! ```
//!
//! ## License
//!
//! MIT
//! ````

use crate::core::types::{Lang, Settings};

/// Section headings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headings {
    pub features: &'static str,
    pub installation: &'static str,
    pub usage: &'static str,
    pub license: &'static str,
}

const EN: Headings = Headings {
    features: "Features",
    installation: "Installation",
    usage: "Usage",
    license: "License",
};

const ZH: Headings = Headings {
    features: "功能特性",
    installation: "安装",
    usage: "使用方法",
    license: "许可证",
};

/// Headings for `lang`.
pub fn headings(lang: Lang) -> Headings {
    match lang {
        Lang::En => EN,
        Lang::Zh => ZH,
    }
}

/// Render the README for `settings`.
///
/// The features section is omitted when there are no features.
///
/// # Example
///
/// ```
/// use readmecraft::core::types::{Lang, Settings};
/// use readmecraft::ui::readme::generate_readme;
/// use std::path::PathBuf;
///
/// let settings = Settings {
///     project_name: "widget".to_string(),
///     description: "Makes widgets".to_string(),
///     features: vec!["Fast".to_string()],
///     install: "cargo install widget".to_string(),
///     usage: "widget --help".to_string(),
///     license: "MIT".to_string(),
///     lang: Lang::En,
///     out: PathBuf::from("README.md"),
/// };
///
/// let readme = generate_readme(&settings);
/// assert!(readme.starts_with("# widget\n"));
/// assert!(readme.contains("- Fast"));
/// ```
pub fn generate_readme(settings: &Settings) -> String {
    let h = headings(settings.lang);

    let mut lines = vec![
        format!("# {}", settings.project_name),
        String::new(),
        settings.description.clone(),
        String::new(),
    ];

    if !settings.features.is_empty() {
        lines.push(format!("## {}", h.features));
        lines.push(String::new());
        lines.extend(settings.features.iter().map(|f| format!("- {}", f)));
        lines.push(String::new());
    }

    lines.extend(code_section(h.installation, &settings.install));
    lines.extend(code_section(h.usage, &settings.usage));

    lines.push(format!("## {}", h.license));
    lines.push(String::new());
    lines.push(settings.license.clone());

    let mut readme = lines.join("\n");
    readme.push('\n');
    readme
}

fn code_section(heading: &str, body: &str) -> [String; 6] {
    [
        format!("## {}", heading),
        String::new(),
        "```bash".to_string(),
        body.to_string(),
        "```".to_string(),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings(lang: Lang) -> Settings {
        Settings {
            project_name: "widget".to_string(),
            description: "Makes widgets".to_string(),
            features: vec!["Fast".to_string(), "Small".to_string()],
            install: "cargo install widget".to_string(),
            usage: "widget --help".to_string(),
            license: "MIT".to_string(),
            lang,
            out: PathBuf::from("README.md"),
        }
    }

    #[test]
    fn english_document() {
        let expected = "\
# widget

Makes widgets

## Features

- Fast
- Small

## Installation

```bash
cargo install widget
```

## Usage

```bash
widget --help
```

## License

MIT
";
        assert_eq!(generate_readme(&settings(Lang::En)), expected);
    }

    #[test]
    fn chinese_document_uses_chinese_headings() {
        let readme = generate_readme(&settings(Lang::Zh));

        assert!(readme.contains("## 功能特性"));
        assert!(readme.contains("## 安装"));
        assert!(readme.contains("## 使用方法"));
        assert!(readme.contains("## 许可证"));
        assert!(!readme.contains("## Features"));
        assert!(readme.starts_with("# widget\n"));
    }

    #[test]
    fn empty_features_omit_section() {
        let mut s = settings(Lang::En);
        s.features.clear();
        let readme = generate_readme(&s);

        assert!(!readme.contains("## Features"));
        assert!(readme.contains("Makes widgets\n\n## Installation"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let s = settings(Lang::Zh);
        assert_eq!(generate_readme(&s), generate_readme(&s));
    }

    #[test]
    fn output_path_does_not_affect_content() {
        let a = settings(Lang::En);
        let mut b = a.clone();
        b.out = PathBuf::from("docs/OTHER.md");
        assert_eq!(generate_readme(&a), generate_readme(&b));
    }
}
