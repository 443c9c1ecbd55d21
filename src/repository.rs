use crate::airfoil::AirfoilGeometry;

/// An owned registry of loaded airfoils, keyed by name. The application
/// context constructs one and passes it around explicitly; there is no
/// process-wide list.
#[derive(Default)]
pub struct FoilRegistry {
    entries: Vec<AirfoilGeometry>,
}

impl FoilRegistry {
    pub fn new() -> FoilRegistry {
        FoilRegistry::default()
    }

    /// Add an airfoil, replacing any existing entry with the same name.
    pub fn insert(&mut self, foil: AirfoilGeometry) {
        if let Some(existing) = self.entries.iter_mut().find(|f| f.name() == foil.name()) {
            *existing = foil;
        } else {
            self.entries.push(foil);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AirfoilGeometry> {
        self.entries.iter().find(|f| f.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AirfoilGeometry> {
        self.entries.iter_mut().find(|f| f.name() == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AirfoilGeometry> {
        let index = self.entries.iter().position(|f| f.name() == name)?;
        Some(self.entries.remove(index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|f| f.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
