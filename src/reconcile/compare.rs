//! Field-by-field comparison of one osgameclones entry with our game.

use thiserror::Error;

use crate::reconcile::entry::ExternalEntry;
use crate::reconcile::mapping::map_license;
use crate::site::types::{values, Game};
use crate::site::utils::strip_scheme;

/// SourceForge project pages are not code repositories.
const SOURCEFORGE_PROJECTS: &str = "https://sourceforge.net/projects/";

/// Framework name osgameclones uses for plain browser games.
const IGNORED_FRAMEWORK: &str = "html5";

/// One disagreement between the two catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Discrepancy {
    #[error("code language {0} missing")]
    MissingCodeLanguage(String),
    #[error("code/assets license {0} missing")]
    MissingLicense(String),
    #[error("code dependency {0} missing")]
    MissingCodeDependency(String),
    #[error("code repository {0} missing")]
    MissingRepository(String),
    #[error("home url {0} missing")]
    MissingHome(String),
    #[error("status playable, not mature with us")]
    PlayableNotMature,
    #[error("status {0}, mature with us")]
    MatureNotPlayable(String),
    #[error("status unplayable")]
    Unplayable,
    #[error("development halted, not inactive with us")]
    HaltedNotInactive,
    #[error("development {0}, inactive with us")]
    ActiveButInactive(String),
    #[error("development complete, not mature with us")]
    CompleteNotMature,
    #[error("original {0} not mentioned")]
    OriginalNotMentioned(String),
    #[error("mp: {0} not in keywords")]
    MultiplayerNotInKeywords(String),
    #[error("content: {0} not in keywords")]
    ContentNotInKeywords(String),
    #[error("type: {0} not in keywords")]
    TypeNotInKeywords(String),
}

/// Compare an osgameclones entry with the game of the same name.
///
/// Checks run in a fixed order: languages, licenses, frameworks,
/// repositories, home urls, status, development, originals, multiplayer,
/// content, type.
pub fn compare(external: &ExternalEntry, ours: &Game) -> Vec<Discrepancy> {
    let mut found = Vec::new();
    let keywords: Vec<&str> = values(&ours.keywords).collect();

    // lang
    let languages: Vec<&str> = values(&ours.code_language).collect();
    for lang in &external.lang {
        if !languages.contains(&lang.as_str()) {
            found.push(Discrepancy::MissingCodeLanguage(lang.clone()));
        }
    }

    // license, either code or assets
    let licenses: Vec<&str> = values(&ours.code_license).chain(values(&ours.assets_license)).collect();
    for license in &external.license {
        let license = map_license(license);
        if !licenses.contains(&license) {
            found.push(Discrepancy::MissingLicense(license.to_string()));
        }
    }

    // framework, case-insensitive
    let dependencies: Vec<String> = values(&ours.code_dependencies).map(str::to_lowercase).collect();
    for framework in external.framework.iter().map(|f| f.to_lowercase()) {
        if framework != IGNORED_FRAMEWORK && !dependencies.contains(&framework) {
            found.push(Discrepancy::MissingCodeDependency(framework));
        }
    }

    // repo, with or without .git
    let repositories: Vec<&str> = values(&ours.code_repository).collect();
    for repo in &external.repo {
        if repo.starts_with(SOURCEFORGE_PROJECTS) {
            continue;
        }
        let with_git = format!("{}.git", repo);
        if !repositories.contains(&repo.as_str()) && !repositories.contains(&with_git.as_str()) {
            found.push(Discrepancy::MissingRepository(repo.clone()));
        }
    }

    // url, scheme ignored
    let homes: Vec<&str> = values(&ours.home).map(strip_scheme).collect();
    for url in external.url.iter().map(|u| strip_scheme(u)) {
        if !homes.contains(&url) {
            found.push(Discrepancy::MissingHome(url.to_string()));
        }
    }

    if let Some(status) = external.status.as_deref() {
        if status == "playable" && !ours.is_mature() {
            found.push(Discrepancy::PlayableNotMature);
        }
        if status != "playable" && ours.is_mature() {
            found.push(Discrepancy::MatureNotPlayable(status.to_string()));
        }
        if status == "unplayable" {
            found.push(Discrepancy::Unplayable);
        }
    }

    if let Some(development) = external.development.as_deref() {
        match development {
            "halted" if !ours.is_inactive() => found.push(Discrepancy::HaltedNotInactive),
            "very active" | "active" | "sporadic" if ours.is_inactive() => {
                found.push(Discrepancy::ActiveButInactive(development.to_string()))
            }
            "complete" if !ours.is_mature() => found.push(Discrepancy::CompleteNotMature),
            _ => {}
        }
    }

    for original in &external.originals {
        let keyword = format!("inspired by {}", original);
        if !keywords.contains(&keyword.as_str()) {
            found.push(Discrepancy::OriginalNotMentioned(original.clone()));
        }
    }

    for mode in &external.multiplayer {
        if !keywords.contains(&mode.as_str()) {
            found.push(Discrepancy::MultiplayerNotInKeywords(mode.clone()));
        }
    }

    if let Some(content) = external.content.as_deref() {
        let keyword = format!("{} content", content);
        if !keywords.contains(&keyword.as_str()) {
            found.push(Discrepancy::ContentNotInKeywords(content.to_string()));
        }
    }

    if let Some(game_type) = external.game_type.as_deref() {
        if !keywords.contains(&game_type) {
            found.push(Discrepancy::TypeNotInKeywords(game_type.to_string()));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::types::FieldValue;

    fn fields(values: &[&str]) -> Vec<FieldValue> {
        values.iter().map(|v| FieldValue::from(*v)).collect()
    }

    fn openttd() -> Game {
        Game {
            title: "OpenTTD".to_string(),
            home: fields(&["https://www.openttd.org/"]),
            keywords: fields(&["remake", "inspired by Transport Tycoon Deluxe", "Online", "swappable content"]),
            state: vec!["mature".to_string()],
            code_language: fields(&["C++"]),
            code_license: fields(&["GPL-2.0"]),
            code_repository: fields(&["https://github.com/OpenTTD/OpenTTD.git"]),
            code_dependencies: fields(&["SDL2"]),
            ..Default::default()
        }
    }

    fn external() -> ExternalEntry {
        ExternalEntry {
            name: "OpenTTD".to_string(),
            game_type: Some("remake".to_string()),
            originals: vec!["Transport Tycoon Deluxe".to_string()],
            repo: vec![
                "https://github.com/OpenTTD/OpenTTD".to_string(),
                "https://sourceforge.net/projects/openttd/".to_string(),
            ],
            url: vec!["http://www.openttd.org/".to_string()],
            development: Some("very active".to_string()),
            status: Some("playable".to_string()),
            multiplayer: vec!["Online".to_string()],
            lang: vec!["C++".to_string()],
            framework: vec!["sdl2".to_string(), "HTML5".to_string()],
            license: vec!["GPL2".to_string()],
            content: Some("swappable".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_matching_entry_has_no_discrepancies() {
        assert_eq!(compare(&external(), &openttd()), vec![]);
    }

    #[test]
    fn test_missing_values() {
        let mut entry = external();
        entry.lang.push("Lua".to_string());
        entry.license.push("MIT".to_string());
        entry.framework.push("Allegro".to_string());
        entry.repo.push("https://gitlab.com/x/y".to_string());
        entry.multiplayer.push("LAN".to_string());
        entry.originals.push("Locomotion".to_string());

        let found = compare(&entry, &openttd());
        assert_eq!(
            found,
            vec![
                Discrepancy::MissingCodeLanguage("Lua".to_string()),
                Discrepancy::MissingLicense("MIT".to_string()),
                Discrepancy::MissingCodeDependency("allegro".to_string()),
                Discrepancy::MissingRepository("https://gitlab.com/x/y".to_string()),
                Discrepancy::OriginalNotMentioned("Locomotion".to_string()),
                Discrepancy::MultiplayerNotInKeywords("LAN".to_string()),
            ]
        );
    }

    #[test]
    fn test_assets_license_counts() {
        let mut game = openttd();
        game.assets_license = fields(&["CC0"]);
        let mut entry = external();
        entry.license = vec!["CC0".to_string()];
        assert_eq!(compare(&entry, &game), vec![]);
    }

    #[test]
    fn test_state_disagreements() {
        let mut game = openttd();
        game.state = vec!["beta".to_string(), "inactive since 2015".to_string()];

        let found = compare(&external(), &game);
        assert_eq!(
            found,
            vec![
                Discrepancy::PlayableNotMature,
                Discrepancy::ActiveButInactive("very active".to_string()),
            ]
        );

        let mut entry = external();
        entry.status = Some("unplayable".to_string());
        entry.development = Some("complete".to_string());
        let found = compare(&entry, &openttd());
        assert_eq!(
            found,
            vec![Discrepancy::MatureNotPlayable("unplayable".to_string()), Discrepancy::Unplayable]
        );

        entry.development = Some("halted".to_string());
        assert!(compare(&entry, &openttd()).contains(&Discrepancy::HaltedNotInactive));
    }

    #[test]
    fn test_display() {
        assert_eq!(Discrepancy::MissingHome("example.org".to_string()).to_string(), "home url example.org missing");
        assert_eq!(Discrepancy::TypeNotInKeywords("clone".to_string()).to_string(), "type: clone not in keywords");
    }
}
