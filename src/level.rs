//! Level file parsing.
//!
//! A level is a whitespace-separated token stream. Every record starts with a
//! keyword; line breaks carry no meaning beyond separating tokens.
//!
//! ```text
//! Tile   <animation> <gridX> <gridY>
//! Dec    <animation> <gridX> <gridY>
//! Player <gridX> <gridY> <halfWidth> <halfHeight> <speed> <jump> <maxFallSpeed> <gravity> <weapon>
//! ```
//!
//! Grid coordinates count cells from the bottom-left corner of the view.
//! Exactly one `Player` record is required. Any other keyword, a missing or
//! non-numeric field, or a missing/duplicate player is a [`LevelError`]; level
//! data is trusted local content so the caller treats every error as fatal.

use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown level keyword `{0}`")]
    UnknownKeyword(String),
    #[error("`{keyword}` record is missing its {field}")]
    MissingField {
        keyword: &'static str,
        field: &'static str,
    },
    #[error("`{keyword}` record has an invalid {field}: `{value}`")]
    InvalidNumber {
        keyword: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("level has no Player record")]
    MissingPlayer,
    #[error("level has more than one Player record")]
    DuplicatePlayer,
    #[error("level references unknown animation `{0}`")]
    UnknownAnimation(String),
}

/// Player tuning read from the level. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Spawn cell.
    pub x: f32,
    pub y: f32,
    /// Bounding box half extents.
    pub cx: f32,
    pub cy: f32,
    /// Horizontal speed in pixels per frame.
    pub speed: f32,
    /// Vertical velocity applied when a jump starts (negative is up).
    pub jump: f32,
    /// Terminal falling speed.
    pub max_speed: f32,
    pub gravity: f32,
    /// Animation used for bullets.
    pub weapon: String,
}

/// Static entity placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub animation: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelRecord {
    Tile(Placement),
    Dec(Placement),
    Player(PlayerConfig),
}

/// Parsed level, records kept in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    records: Vec<LevelRecord>,
    player: PlayerConfig,
}

impl Level {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::parse(&text)?;
        log::info!(
            "Loaded level {} ({} records)",
            path.display(),
            level.records.len()
        );
        Ok(level)
    }

    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut tokens = Tokens(text.split_whitespace());
        let mut records = Vec::new();
        let mut player = None;

        while let Some(keyword) = tokens.0.next() {
            let record = match keyword {
                "Tile" => LevelRecord::Tile(tokens.placement("Tile")?),
                "Dec" => LevelRecord::Dec(tokens.placement("Dec")?),
                "Player" => {
                    let config = tokens.player()?;
                    if player.replace(config.clone()).is_some() {
                        return Err(LevelError::DuplicatePlayer);
                    }
                    LevelRecord::Player(config)
                }
                other => return Err(LevelError::UnknownKeyword(other.to_string())),
            };
            records.push(record);
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        Ok(Self { records, player })
    }

    pub fn records(&self) -> &[LevelRecord] {
        &self.records
    }

    pub fn player(&self) -> &PlayerConfig {
        &self.player
    }

    /// Every animation name the level refers to, in file order.
    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| match record {
            LevelRecord::Tile(p) | LevelRecord::Dec(p) => p.animation.as_str(),
            LevelRecord::Player(config) => config.weapon.as_str(),
        })
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn word(&mut self, keyword: &'static str, field: &'static str) -> Result<&'a str, LevelError> {
        self.0.next().ok_or(LevelError::MissingField { keyword, field })
    }

    fn number(&mut self, keyword: &'static str, field: &'static str) -> Result<f32, LevelError> {
        let token = self.word(keyword, field)?;
        token.parse().map_err(|_| LevelError::InvalidNumber {
            keyword,
            field,
            value: token.to_string(),
        })
    }

    fn placement(&mut self, keyword: &'static str) -> Result<Placement, LevelError> {
        Ok(Placement {
            animation: self.word(keyword, "animation name")?.to_string(),
            x: self.number(keyword, "grid x")?,
            y: self.number(keyword, "grid y")?,
        })
    }

    fn player(&mut self) -> Result<PlayerConfig, LevelError> {
        const KW: &str = "Player";
        Ok(PlayerConfig {
            x: self.number(KW, "grid x")?,
            y: self.number(KW, "grid y")?,
            cx: self.number(KW, "bounding box half width")?,
            cy: self.number(KW, "bounding box half height")?,
            speed: self.number(KW, "speed")?,
            jump: self.number(KW, "jump impulse")?,
            max_speed: self.number(KW, "max fall speed")?,
            gravity: self.number(KW, "gravity")?,
            weapon: self.word(KW, "weapon animation")?.to_string(),
        })
    }
}
