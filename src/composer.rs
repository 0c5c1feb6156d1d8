//! Forum Composer State
//!
//! Pure state behind the create/edit forum page: an ordered list of post
//! editors, validation, preview resolution, and edit-mode reconstruction.
//! The page component owns a `Composer` in a signal and renders from it;
//! nothing in here touches the DOM.

use std::fmt;

use crate::basket::SelectionBasket;
use crate::directory;
use crate::models::{Character, PostDraft, ThreadDetail};

/// Validation failures, each carrying its user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    MissingTitle,
    NoEditors,
    /// One aggregated message for any editor missing its character
    /// selection or content; validation never partially succeeds.
    IncompletePosts,
    /// Removing the last remaining editor is refused.
    LastEditor,
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ComposeError::MissingTitle => "Please enter a forum title!",
            ComposeError::NoEditors => "Please add at least one post!",
            ComposeError::IncompletePosts => {
                "Please fill in all posts with character selection and content!"
            }
            ComposeError::LastEditor => "At least one post is required!",
        };
        write!(f, "{msg}")
    }
}

/// One post editor block: character choice, per-post overrides, content.
#[derive(Debug, Clone, PartialEq)]
pub struct PostEditor {
    /// Stable render key, never reused within one composer.
    pub key: u32,
    /// Selected character id; empty means unselected (settings inactive).
    pub character_id: String,
    /// Fallback used once by [`Composer::resync_selection`] when the
    /// current value is no longer in the basket.
    preset_character_id: Option<String>,
    pub nickname: String,
    /// File name of a newly chosen avatar, if any.
    pub avatar_file: Option<String>,
    /// Avatar carried over from a saved post in edit mode.
    pub stored_avatar: Option<String>,
    pub content: String,
}

impl PostEditor {
    fn new(key: u32) -> Self {
        Self {
            key,
            character_id: String::new(),
            preset_character_id: None,
            nickname: String::new(),
            avatar_file: None,
            stored_avatar: None,
            content: String::new(),
        }
    }

    /// The character-settings panel is shown exactly when a character is
    /// chosen.
    pub fn settings_active(&self) -> bool {
        !self.character_id.is_empty()
    }
}

/// A post with its character snapshot resolved, ready for the read-only
/// preview rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPost {
    pub floor: u32,
    pub nickname: String,
    pub avatar: Option<String>,
    pub character_name: String,
    pub character_fandom: String,
    pub content: String,
}

/// The in-memory forum draft being composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composer {
    pub title: String,
    /// Set while editing an existing forum; cleared after a successful
    /// save. Carried in the save payload so the backend updates instead
    /// of creating.
    pub editing_id: Option<String>,
    editors: Vec<PostEditor>,
    next_key: u32,
}

impl Composer {
    /// A fresh composer with a single empty editor, matching the initial
    /// state of the create-forum page.
    pub fn new() -> Self {
        let mut composer = Self::default();
        composer.add_editor();
        composer
    }

    pub fn editors(&self) -> &[PostEditor] {
        &self.editors
    }

    pub fn editor(&self, key: u32) -> Option<&PostEditor> {
        self.editors.iter().find(|e| e.key == key)
    }

    fn editor_mut(&mut self, key: u32) -> Option<&mut PostEditor> {
        self.editors.iter_mut().find(|e| e.key == key)
    }

    /// Append a new empty editor and return its key.
    pub fn add_editor(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        self.editors.push(PostEditor::new(key));
        key
    }

    /// Remove an editor; refused for the last remaining one so a forum
    /// can never be edited down to zero posts.
    pub fn remove_editor(&mut self, key: u32) -> Result<(), ComposeError> {
        if self.editors.len() <= 1 {
            return Err(ComposeError::LastEditor);
        }
        self.editors.retain(|e| e.key != key);
        Ok(())
    }

    pub fn set_content(&mut self, key: u32, content: String) {
        if let Some(editor) = self.editor_mut(key) {
            editor.content = content;
        }
    }

    pub fn set_nickname(&mut self, key: u32, nickname: String) {
        if let Some(editor) = self.editor_mut(key) {
            editor.nickname = nickname;
        }
    }

    pub fn set_avatar_file(&mut self, key: u32, file_name: Option<String>) {
        if let Some(editor) = self.editor_mut(key) {
            editor.avatar_file = file_name;
        }
    }

    /// Drive the settings panel from the dropdown value. The nickname is
    /// prefilled from the character's default only while the field is
    /// empty; a manually entered nickname survives switching characters.
    pub fn select_character(&mut self, key: u32, id: &str, characters: &[Character]) {
        let Some(editor) = self.editor_mut(key) else {
            return;
        };
        editor.character_id = id.to_string();
        if !id.is_empty() && editor.nickname.trim().is_empty() {
            if let Some(character) = directory::find_by_id(characters, id) {
                editor.nickname = character.nickname.clone();
            }
        }
    }

    /// Reconcile every editor's selection with the basket: keep the
    /// current value if it is still selected, otherwise fall back to the
    /// editor's one-shot preset, otherwise unselect.
    pub fn resync_selection(&mut self, basket: &SelectionBasket) {
        for editor in &mut self.editors {
            if !editor.character_id.is_empty() && basket.contains(&editor.character_id) {
                continue;
            }
            if let Some(preset) = editor.preset_character_id.take() {
                if basket.contains(&preset) {
                    editor.character_id = preset;
                    continue;
                }
            }
            editor.character_id.clear();
        }
    }

    /// Walk the editors in order and collect submission-ready drafts.
    ///
    /// Floors are assigned from editor order (`1..=N`). Any missing
    /// title, character, or content aborts the whole collection with a
    /// single error and zero drafts.
    pub fn validate(&self, characters: &[Character]) -> Result<Vec<PostDraft>, ComposeError> {
        if self.title.trim().is_empty() {
            return Err(ComposeError::MissingTitle);
        }
        if self.editors.is_empty() {
            return Err(ComposeError::NoEditors);
        }

        let mut posts = Vec::with_capacity(self.editors.len());
        for (index, editor) in self.editors.iter().enumerate() {
            let Some(character) = directory::find_by_id(characters, &editor.character_id) else {
                return Err(ComposeError::IncompletePosts);
            };
            let content = editor.content.trim();
            if content.is_empty() {
                return Err(ComposeError::IncompletePosts);
            }

            let nickname = match editor.nickname.trim() {
                "" => character.nickname.clone(),
                n => n.to_string(),
            };
            let avatar = editor
                .avatar_file
                .clone()
                .or_else(|| editor.stored_avatar.clone())
                .or_else(|| character.avatar_url.clone());

            posts.push(PostDraft {
                character_id: character.id.clone(),
                content: content.to_string(),
                floor: (index + 1) as u32,
                nickname,
                avatar,
            });
        }
        Ok(posts)
    }

    /// Validate, then resolve each draft against its character for the
    /// read-only preview.
    pub fn preview(&self, characters: &[Character]) -> Result<Vec<PreviewPost>, ComposeError> {
        let posts = self.validate(characters)?;
        Ok(posts
            .into_iter()
            .map(|post| {
                let character = directory::find_by_id(characters, &post.character_id);
                PreviewPost {
                    floor: post.floor,
                    nickname: post.nickname,
                    avatar: post.avatar,
                    character_name: character.map(|c| c.name.clone()).unwrap_or_default(),
                    character_fandom: character.map(|c| c.fandom.clone()).unwrap_or_default(),
                    content: post.content,
                }
            })
            .collect())
    }

    /// Rebuild the composer from a saved forum for editing.
    ///
    /// Returns the selection basket derived from the unique character ids
    /// referenced across the forum's posts, in post order. Each saved
    /// post becomes one editor with its character preselected (also kept
    /// as the resync preset), its stored nickname and content, and its
    /// saved avatar retained as the submission fallback.
    pub fn load_forum(
        &mut self,
        forum: &ThreadDetail,
        characters: &[Character],
    ) -> SelectionBasket {
        self.title = forum.title.clone();
        self.editing_id = Some(forum.id.clone());

        let basket =
            SelectionBasket::from_ids(forum.posts.iter().filter_map(|p| p.character_id.clone()));

        self.editors.clear();
        for post in &forum.posts {
            let key = self.next_key;
            self.next_key += 1;

            let character_id = post.character_id.clone().unwrap_or_default();
            let nickname = if post.nickname.is_empty() {
                directory::find_by_id(characters, &character_id)
                    .map(|c| c.nickname.clone())
                    .unwrap_or_default()
            } else {
                post.nickname.clone()
            };

            self.editors.push(PostEditor {
                key,
                preset_character_id: Some(character_id.clone()).filter(|id| !id.is_empty()),
                character_id,
                nickname,
                avatar_file: None,
                stored_avatar: post.avatar.clone(),
                content: post.content.clone(),
            });
        }
        if self.editors.is_empty() {
            self.add_editor();
        }
        basket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn character(id: &str, name: &str, nickname: &str) -> Character {
        Character {
            id: id.to_string(),
            name: name.to_string(),
            nickname: nickname.to_string(),
            fandom: "Harry Potter".to_string(),
            avatar_url: Some(format!("/static/{id}.png")),
            created_at: None,
        }
    }

    fn directory() -> Vec<Character> {
        vec![
            character("harry", "Harry Potter", "TheBoyWhoLived"),
            character("hermione", "Hermione Granger", "BrightestWitch"),
        ]
    }

    fn filled_composer(n: usize, characters: &[Character]) -> Composer {
        let mut composer = Composer::new();
        composer.title = "Hello".to_string();
        while composer.editors().len() < n {
            composer.add_editor();
        }
        let keys: Vec<u32> = composer.editors().iter().map(|e| e.key).collect();
        for (i, key) in keys.into_iter().enumerate() {
            composer.select_character(key, "harry", characters);
            composer.set_content(key, format!("post {}", i + 1));
        }
        composer
    }

    #[test]
    fn new_composer_has_one_editor() {
        let composer = Composer::new();
        assert_eq!(composer.editors().len(), 1);
        assert!(!composer.editors()[0].settings_active());
    }

    #[test]
    fn validate_assigns_sequential_floors() {
        let chars = directory();
        let composer = filled_composer(3, &chars);
        let posts = composer.validate(&chars).unwrap();
        assert_eq!(posts.len(), 3);
        let floors: Vec<u32> = posts.iter().map(|p| p.floor).collect();
        assert_eq!(floors, [1, 2, 3]);
    }

    #[test]
    fn validate_requires_title() {
        let chars = directory();
        let mut composer = filled_composer(1, &chars);
        composer.title = "   ".to_string();
        assert_eq!(composer.validate(&chars), Err(ComposeError::MissingTitle));
    }

    #[test]
    fn one_empty_field_fails_the_whole_collection() {
        let chars = directory();
        let mut composer = filled_composer(3, &chars);
        let second = composer.editors()[1].key;
        composer.set_content(second, "   \n ".to_string());
        assert_eq!(composer.validate(&chars), Err(ComposeError::IncompletePosts));

        let mut composer = filled_composer(3, &chars);
        let third = composer.editors()[2].key;
        composer.select_character(third, "", &chars);
        assert_eq!(composer.validate(&chars), Err(ComposeError::IncompletePosts));
    }

    #[test]
    fn unknown_character_fails_validation() {
        let chars = directory();
        let mut composer = filled_composer(1, &chars);
        let key = composer.editors()[0].key;
        composer.select_character(key, "gandalf", &chars);
        assert_eq!(composer.validate(&chars), Err(ComposeError::IncompletePosts));
    }

    #[test]
    fn defaults_resolve_from_the_character() {
        let chars = directory();
        let mut composer = Composer::new();
        composer.title = "Hello".to_string();
        let key = composer.editors()[0].key;
        composer.select_character(key, "harry", &chars);
        composer.set_nickname(key, String::new());
        composer.set_content(key, "Hi!".to_string());

        let posts = composer.validate(&chars).unwrap();
        assert_eq!(posts[0].nickname, "TheBoyWhoLived");
        assert_eq!(posts[0].avatar.as_deref(), Some("/static/harry.png"));
    }

    #[test]
    fn publish_scenario_payload() {
        let chars = directory();
        let mut composer = Composer::new();
        composer.title = "Hello".to_string();
        let key = composer.editors()[0].key;
        composer.select_character(key, "harry", &chars);
        composer.set_content(key, "Hi!".to_string());

        let posts = composer.validate(&chars).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].character_id, "harry");
        assert_eq!(posts[0].content, "Hi!");
        assert_eq!(posts[0].floor, 1);
        assert_eq!(posts[0].nickname, "TheBoyWhoLived");
    }

    #[test]
    fn removing_last_editor_is_refused() {
        let mut composer = Composer::new();
        let key = composer.editors()[0].key;
        assert_eq!(composer.remove_editor(key), Err(ComposeError::LastEditor));
        assert_eq!(composer.editors().len(), 1);
    }

    #[test]
    fn removing_with_two_or_more_succeeds() {
        let mut composer = Composer::new();
        let second = composer.add_editor();
        assert_eq!(composer.remove_editor(second), Ok(()));
        assert_eq!(composer.editors().len(), 1);
    }

    #[test]
    fn nickname_prefills_once_and_survives_character_switch() {
        let chars = directory();
        let mut composer = Composer::new();
        let key = composer.editors()[0].key;

        composer.select_character(key, "harry", &chars);
        assert_eq!(composer.editor(key).unwrap().nickname, "TheBoyWhoLived");

        // A manual edit is never clobbered by re-entering the active state
        // with a different character.
        composer.set_nickname(key, "CustomNick".to_string());
        composer.select_character(key, "hermione", &chars);
        assert_eq!(composer.editor(key).unwrap().nickname, "CustomNick");

        // Clearing the field re-arms the prefill.
        composer.set_nickname(key, String::new());
        composer.select_character(key, "harry", &chars);
        assert_eq!(composer.editor(key).unwrap().nickname, "TheBoyWhoLived");
    }

    #[test]
    fn resync_keeps_preset_then_unselects() {
        let chars = directory();
        let mut composer = Composer::new();
        let key = composer.editors()[0].key;
        composer.select_character(key, "harry", &chars);

        // Still in the basket: untouched.
        let basket = SelectionBasket::from_ids(["harry", "hermione"]);
        composer.resync_selection(&basket);
        assert_eq!(composer.editor(key).unwrap().character_id, "harry");

        // Dropped from the basket with no preset: unselected.
        let basket = SelectionBasket::from_ids(["hermione"]);
        composer.resync_selection(&basket);
        assert_eq!(composer.editor(key).unwrap().character_id, "");
    }

    #[test]
    fn resync_preset_is_one_shot() {
        let chars = directory();
        let forum = ThreadDetail {
            id: "42".to_string(),
            title: "T".to_string(),
            status: None,
            posts: vec![Post {
                character_id: Some("harry".to_string()),
                character_name: None,
                character_fandom: None,
                content: "Hi".to_string(),
                floor: 1,
                nickname: String::new(),
                avatar: None,
            }],
            created_at: None,
            updated_at: None,
        };
        let mut composer = Composer::default();
        composer.load_forum(&forum, &chars);
        let key = composer.editors()[0].key;

        // Value falls out of the basket; the preset restores it once.
        composer.editor_mut(key).unwrap().character_id.clear();
        let basket = SelectionBasket::from_ids(["harry"]);
        composer.resync_selection(&basket);
        assert_eq!(composer.editor(key).unwrap().character_id, "harry");

        // Second time around the preset is spent.
        composer.editor_mut(key).unwrap().character_id.clear();
        composer.resync_selection(&basket);
        assert_eq!(composer.editor(key).unwrap().character_id, "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let chars = directory();
        let mut composer = Composer::new();
        composer.title = "Study Group".to_string();
        let k1 = composer.editors()[0].key;
        let k2 = composer.add_editor();
        let k3 = composer.add_editor();
        composer.select_character(k1, "harry", &chars);
        composer.set_content(k1, "Anyone up for O.W.L. prep?".to_string());
        composer.select_character(k2, "hermione", &chars);
        composer.set_content(k2, "I have schedules ready.".to_string());
        composer.select_character(k3, "harry", &chars);
        composer.set_nickname(k3, "JustHarry".to_string());
        composer.set_content(k3, "Brilliant, thanks!".to_string());

        let saved = composer.validate(&chars).unwrap();
        let forum = ThreadDetail {
            id: "42".to_string(),
            title: composer.title.clone(),
            status: None,
            posts: saved
                .iter()
                .map(|p| Post {
                    character_id: Some(p.character_id.clone()),
                    character_name: None,
                    character_fandom: None,
                    content: p.content.clone(),
                    floor: p.floor,
                    nickname: p.nickname.clone(),
                    avatar: p.avatar.clone(),
                })
                .collect(),
            created_at: None,
            updated_at: None,
        };

        let mut reloaded = Composer::default();
        let basket = reloaded.load_forum(&forum, &chars);

        // Basket is the unique character-id set in post order.
        assert_eq!(basket.ids(), ["harry", "hermione"]);
        assert_eq!(reloaded.editing_id.as_deref(), Some("42"));
        assert_eq!(reloaded.title, "Study Group");

        // Each editor repopulated exactly as saved.
        let editors = reloaded.editors();
        assert_eq!(editors.len(), 3);
        assert_eq!(editors[0].character_id, "harry");
        assert_eq!(editors[0].nickname, "TheBoyWhoLived");
        assert_eq!(editors[0].content, "Anyone up for O.W.L. prep?");
        assert_eq!(editors[1].character_id, "hermione");
        assert_eq!(editors[2].nickname, "JustHarry");
        assert!(editors.iter().all(|e| e.settings_active()));

        // And it validates straight back to the same drafts.
        assert_eq!(reloaded.validate(&chars).unwrap(), saved);
    }

    #[test]
    fn preview_resolves_character_snapshots() {
        let chars = directory();
        let composer = filled_composer(2, &chars);
        let preview = composer.preview(&chars).unwrap();
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].character_name, "Harry Potter");
        assert_eq!(preview[0].character_fandom, "Harry Potter");
        assert_eq!(preview[1].floor, 2);
    }

    #[test]
    fn preview_propagates_validation_failure() {
        let chars = directory();
        let mut composer = filled_composer(2, &chars);
        composer.set_content(composer.editors()[0].key, String::new());
        assert_eq!(composer.preview(&chars), Err(ComposeError::IncompletePosts));
    }
}
