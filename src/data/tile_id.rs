/// Monotonic source of tile ids: "tile-1", "tile-2", ...
///
/// Ids are never reused within a scope, even after removals.
pub struct TileIdGenerator {
    next: u64,
}

impl TileIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("tile-{}", self.next);
        self.next += 1;
        id
    }
}

impl Default for TileIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_unique() {
        let mut ids = TileIdGenerator::new();
        assert_eq!(ids.next_id(), "tile-1");
        assert_eq!(ids.next_id(), "tile-2");
        assert_eq!(ids.next_id(), "tile-3");
    }
}
