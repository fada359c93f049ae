use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team taking part in the championship
///
/// # Invariants
/// - Name cannot be empty
/// - Code cannot be empty
/// - Never mutated after registration
///
/// # Example
/// ```
/// use championship_api::domain::team::Team;
///
/// let team = Team::new("Palmeiras".to_string(), "pal".to_string(), "SP".to_string())
///     .expect("valid team");
///
/// assert_eq!(team.code(), "pal");
/// assert_eq!(team.region(), "SP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
    code: String,
    region: String,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Arguments
    /// * `name` - Display name (cannot be empty)
    /// * `code` - Short identifier used to filter matches (cannot be empty)
    /// * `region` - State or region tag, stored as given (may be empty)
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh id
    /// * `Err(String)` - If name or code is empty
    pub fn new(name: String, code: String, region: String) -> Result<Self, String> {
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if code.is_empty() {
            return Err("Team code cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            code,
            region,
            created_at: Utc::now(),
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation; only repository implementations should call this.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        code: String,
        region: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            code,
            region,
            created_at,
        }
    }
}
