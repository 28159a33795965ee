//! Vector entry sessions
//!
//! A [`VectorSet`] holds the vectors a user is entering, as raw text, in the
//! order they were entered. Each entry is addressed by an opaque [`VectorId`]
//! that stays stable while other entries are added or removed; the display
//! name (`"Vector 3"`) follows the entry's current position instead.
//!
//! The set only stores text. Parsing and the vector math happen when the
//! session is calculated.
//!
//! ```rust
//! use physvek::session::{SessionConfig, VectorSet};
//!
//! let mut set = VectorSet::new();
//! set.add("0", "10");
//! set.add("90", "10");
//! let resultant = set.calculate(&SessionConfig::default()).unwrap();
//! assert!((resultant.angle_degrees - 45.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_MIN_VECTORS;
use crate::vectors::{decompose, ComponentList, PolarVector, Resultant};
use crate::{PhysvekError, Result};

/// Opaque identifier of an entry in a [`VectorSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VectorId(u64);

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Calculation policy for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fewest vectors a calculation accepts
    pub min_vectors: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            min_vectors: DEFAULT_MIN_VECTORS,
        }
    }
}

/// One vector as entered: unparsed angle and magnitude text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorEntry {
    pub id: VectorId,
    pub angle_text: String,
    pub magnitude_text: String,
}

impl VectorEntry {
    /// Parses the entry's text into a polar vector
    pub fn parse(&self) -> Result<PolarVector> {
        let magnitude = parse_value("magnitude", &self.magnitude_text)?;
        let angle_degrees = parse_value("angle", &self.angle_text)?;
        Ok(PolarVector::new(angle_degrees, magnitude))
    }
}

/// Parses user-entered text as a float, ignoring surrounding whitespace
pub fn parse_value(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PhysvekError::InvalidValue {
            field,
            text: text.to_string(),
        })
}

/// Ordered collection of entered vectors
#[derive(Debug, Clone, Default)]
pub struct VectorSet {
    entries: Vec<VectorEntry>,
    next_id: u64,
}

impl VectorSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> VectorId {
        let id = VectorId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: VectorId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(PhysvekError::VectorNotFound(id))
    }

    /// Appends a vector and returns its id
    pub fn add(&mut self, angle_text: impl Into<String>, magnitude_text: impl Into<String>) -> VectorId {
        let id = self.allocate_id();
        self.entries.push(VectorEntry {
            id,
            angle_text: angle_text.into(),
            magnitude_text: magnitude_text.into(),
        });
        debug!("added vector {} at position {}", id, self.entries.len());
        id
    }

    /// Inserts a vector directly after an existing one
    pub fn insert_after(
        &mut self,
        after: VectorId,
        angle_text: impl Into<String>,
        magnitude_text: impl Into<String>,
    ) -> Result<VectorId> {
        let index = self.position(after)? + 1;
        let id = self.allocate_id();
        self.entries.insert(
            index,
            VectorEntry {
                id,
                angle_text: angle_text.into(),
                magnitude_text: magnitude_text.into(),
            },
        );
        debug!("inserted vector {} at position {}", id, index + 1);
        Ok(id)
    }

    /// Replaces the text of an existing entry
    pub fn update(
        &mut self,
        id: VectorId,
        angle_text: impl Into<String>,
        magnitude_text: impl Into<String>,
    ) -> Result<()> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.angle_text = angle_text.into();
        entry.magnitude_text = magnitude_text.into();
        Ok(())
    }

    /// Removes an entry; later entries move up one position
    pub fn remove(&mut self, id: VectorId) -> Result<VectorEntry> {
        let index = self.position(id)?;
        debug!("removed vector {} from position {}", id, index + 1);
        Ok(self.entries.remove(index))
    }

    /// Looks up an entry
    pub fn get(&self, id: VectorId) -> Option<&VectorEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// `"Vector N"`, N being the entry's 1-based position
    pub fn display_name(&self, id: VectorId) -> Result<String> {
        Ok(format!("Vector {}", self.position(id)? + 1))
    }

    /// Entries in order
    pub fn entries(&self) -> &[VectorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses and decomposes every entry, in order
    ///
    /// Stops at the first entry whose text is not a number.
    pub fn components(&self) -> Result<ComponentList> {
        let mut list = ComponentList::new();
        for entry in &self.entries {
            let vector = entry.parse()?;
            list.push(decompose(vector.angle_degrees, vector.magnitude));
        }
        Ok(list)
    }

    /// Adds up the session's vectors
    ///
    /// # Errors
    ///
    /// - [`PhysvekError::NotEnoughVectors`] with fewer than `config.min_vectors` entries
    /// - [`PhysvekError::InvalidValue`] if any entry does not parse
    /// - [`PhysvekError::DegenerateVector`] if the vectors cancel out
    pub fn calculate(&self, config: &SessionConfig) -> Result<Resultant> {
        self.calculate_with_components(config)
            .map(|(_, resultant)| resultant)
    }

    /// Like [`VectorSet::calculate`], also returning the per-entry components
    ///
    /// The vector count is checked before any entry is parsed.
    pub fn calculate_with_components(
        &self,
        config: &SessionConfig,
    ) -> Result<(ComponentList, Resultant)> {
        if self.entries.len() < config.min_vectors {
            return Err(PhysvekError::NotEnoughVectors {
                required: config.min_vectors,
                found: self.entries.len(),
            });
        }
        let components = self.components()?;
        let resultant = components.recompose()?;
        Ok((components, resultant))
    }
}
