//! Rooms domain: room definitions and the RON-backed catalog.

use bevy::prelude::*;
use serde::Deserialize;
use std::fmt;

pub const CATALOG_PATH: &str = "assets/data/rooms.ron";

#[derive(Debug)]
pub enum CatalogLoadError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    NoRooms,
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read catalog file: {err}"),
            Self::Parse(err) => write!(f, "could not parse catalog file: {err}"),
            Self::NoRooms => write!(f, "catalog contains no rooms"),
        }
    }
}

impl From<std::io::Error> for CatalogLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::error::SpannedError> for CatalogLoadError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Parse(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum AttackKind {
    #[default]
    Melee,
    Ranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum FormationAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// A line of enemies centered on `origin`, fanning out to alternating
/// sides along the formation axis.
#[derive(Debug, Clone, Deserialize)]
pub struct EnemyFormation {
    pub origin: (f32, f32),
    pub count: u32,
    #[serde(default)]
    pub attack: AttackKind,
    #[serde(default)]
    pub axis: FormationAxis,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_spacing() -> f32 {
    64.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoorDef {
    pub position: (f32, f32),
}

/// Authored layout of one room: inner floor size, spawn point, doors, and
/// enemy formations. Positions are relative to the room center.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub spawn_point: Option<(f32, f32)>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyFormation>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tutorial: RoomDef,
    rooms: Vec<RoomDef>,
}

/// The room catalog: every room reachable through a door, plus the
/// tutorial room that sits outside random selection.
#[derive(Resource, Debug, Clone)]
pub struct RoomCatalog {
    pub tutorial: RoomDef,
    pub rooms: Vec<RoomDef>,
}

impl RoomCatalog {
    pub fn load(path: &str) -> Result<Self, CatalogLoadError> {
        let text = std::fs::read_to_string(path)?;
        let file: CatalogFile = ron::from_str(&text)?;
        if file.rooms.is_empty() {
            return Err(CatalogLoadError::NoRooms);
        }
        Ok(Self {
            tutorial: file.tutorial,
            rooms: file.rooms,
        })
    }

    /// Hard-coded fallback used when the catalog file is missing or broken.
    pub fn builtin() -> Self {
        Self {
            tutorial: RoomDef {
                name: "tutorial".into(),
                width: 600.0,
                height: 400.0,
                spawn_point: Some((0.0, -80.0)),
                doors: vec![DoorDef {
                    position: (0.0, 180.0),
                }],
                enemies: vec![],
            },
            rooms: vec![
                RoomDef {
                    name: "antechamber".into(),
                    width: 700.0,
                    height: 450.0,
                    spawn_point: Some((0.0, -150.0)),
                    doors: vec![DoorDef {
                        position: (0.0, 205.0),
                    }],
                    enemies: vec![],
                },
                RoomDef {
                    name: "barracks".into(),
                    width: 900.0,
                    height: 600.0,
                    spawn_point: Some((0.0, -220.0)),
                    doors: vec![
                        DoorDef {
                            position: (-430.0, 0.0),
                        },
                        DoorDef {
                            position: (430.0, 0.0),
                        },
                    ],
                    enemies: vec![EnemyFormation {
                        origin: (0.0, 150.0),
                        count: 3,
                        attack: AttackKind::Melee,
                        axis: FormationAxis::Horizontal,
                        spacing: 80.0,
                    }],
                },
                // Authored rotated: the long side runs along world Y.
                RoomDef {
                    name: "gallery".into(),
                    width: 450.0,
                    height: 1000.0,
                    spawn_point: Some((0.0, -420.0)),
                    doors: vec![DoorDef {
                        position: (0.0, 480.0),
                    }],
                    enemies: vec![
                        EnemyFormation {
                            origin: (0.0, 300.0),
                            count: 2,
                            attack: AttackKind::Ranged,
                            axis: FormationAxis::Horizontal,
                            spacing: 96.0,
                        },
                        EnemyFormation {
                            origin: (0.0, 0.0),
                            count: 1,
                            attack: AttackKind::Melee,
                            axis: FormationAxis::Vertical,
                            spacing: 64.0,
                        },
                    ],
                },
            ],
        }
    }
}
