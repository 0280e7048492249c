use rand::Rng;

use crate::domain::scan::{
    entities::{AnalysisPayload, Classification, EnvironmentalImpact},
    ports::FallbackProvider,
};

/// Picks an index into a non-empty catalog.
pub trait ExampleSelector: Send + Sync {
    fn select(&self, len: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl ExampleSelector for RandomSelector {
    fn select(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same entry, wrapping around the catalog length.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl ExampleSelector for FixedSelector {
    fn select(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Fixed, ordered set of example classifications used for fallback synthesis.
#[derive(Debug, Clone)]
pub struct FallbackCatalog<S = RandomSelector>
where
    S: ExampleSelector,
{
    entries: Vec<AnalysisPayload>,
    selector: S,
}

impl FallbackCatalog<RandomSelector> {
    pub fn new() -> Self {
        Self::with_selector(RandomSelector)
    }
}

impl Default for FallbackCatalog<RandomSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FallbackCatalog<S>
where
    S: ExampleSelector,
{
    pub fn with_selector(selector: S) -> Self {
        Self {
            entries: default_examples(),
            selector,
        }
    }

    pub fn entries(&self) -> &[AnalysisPayload] {
        &self.entries
    }
}

impl<S> FallbackProvider for FallbackCatalog<S>
where
    S: ExampleSelector,
{
    fn example(&self) -> AnalysisPayload {
        let index = self.selector.select(self.entries.len());
        self.entries[index].clone()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn default_examples() -> Vec<AnalysisPayload> {
    vec![
        AnalysisPayload {
            object_name: "Plastic Water Bottle".to_string(),
            classification: Classification::Recyclable,
            confidence: 94,
            materials: strings(&["PET Plastic", "Polypropylene Cap"]),
            environmental_impact: EnvironmentalImpact::new("Medium", "High", "Low"),
            disposal_tips: strings(&[
                "Remove cap and label before recycling",
                "Rinse bottle to remove residue",
                "Check local recycling guidelines",
            ]),
            reuse_suggestions: strings(&[
                "Plant pot for seedlings",
                "Storage container for small items",
                "DIY bird feeder",
            ]),
            educational_facts: strings(&[
                "PET bottles can be recycled into clothing fibers",
                "One bottle takes 450 years to decompose naturally",
                "Recycling one bottle saves energy equivalent to powering a 60W bulb for 6 hours",
            ]),
        },
        AnalysisPayload {
            object_name: "Glass Jar".to_string(),
            classification: Classification::Reusable,
            confidence: 98,
            materials: strings(&["Soda-lime Glass", "Metal Lid"]),
            environmental_impact: EnvironmentalImpact::new("Low", "Very High", "Never"),
            disposal_tips: strings(&[
                "Remove labels and adhesive",
                "Separate metal lid for recycling",
                "Clean thoroughly before disposal",
            ]),
            reuse_suggestions: strings(&[
                "Food storage container",
                "Candle holder",
                "Organize small items like screws or buttons",
            ]),
            educational_facts: strings(&[
                "Glass can be recycled infinitely without quality loss",
                "Recycled glass uses 40% less energy than new glass",
                "Glass containers preserve food quality better than plastic",
            ]),
        },
        AnalysisPayload {
            object_name: "Aluminum Can".to_string(),
            classification: Classification::Recyclable,
            confidence: 96,
            materials: strings(&["Aluminum Alloy", "Polymer Lining"]),
            environmental_impact: EnvironmentalImpact::new("Medium", "Very High", "Never"),
            disposal_tips: strings(&[
                "Empty and rinse the can",
                "Leave the tab attached",
                "Do not crush if your facility sorts by shape",
            ]),
            reuse_suggestions: strings(&[
                "Pencil or brush holder",
                "Herb planter with drainage holes",
                "Lantern with punched patterns",
            ]),
            educational_facts: strings(&[
                "Aluminum can be recycled indefinitely",
                "A recycled can can be back on the shelf in about 60 days",
                "Recycling aluminum saves about 95% of the energy needed for new metal",
            ]),
        },
        AnalysisPayload {
            object_name: "Cardboard Box".to_string(),
            classification: Classification::Recyclable,
            confidence: 92,
            materials: strings(&["Corrugated Cardboard", "Packing Tape"]),
            environmental_impact: EnvironmentalImpact::new("Low", "High", "High"),
            disposal_tips: strings(&[
                "Flatten the box before recycling",
                "Remove tape and plastic inserts",
                "Keep it dry, wet cardboard is often rejected",
            ]),
            reuse_suggestions: strings(&[
                "Moving or storage box",
                "Weed barrier under garden mulch",
                "Drawer organizer",
            ]),
            educational_facts: strings(&[
                "Cardboard fibers can be recycled five to seven times",
                "Recycling one ton of cardboard saves about 17 trees",
                "Greasy pizza boxes usually belong in compost, not recycling",
            ]),
        },
        AnalysisPayload {
            object_name: "Polystyrene Foam Cup".to_string(),
            classification: Classification::NonRecyclable,
            confidence: 89,
            materials: strings(&["Expanded Polystyrene (PS #6)"]),
            environmental_impact: EnvironmentalImpact::new("High", "Very Low", "Never"),
            disposal_tips: strings(&[
                "Place in general waste unless a foam drop-off exists nearby",
                "Do not put foam in curbside recycling",
                "Empty any liquid before disposal",
            ]),
            reuse_suggestions: strings(&[
                "Seed starter cup",
                "Paint mixing cup",
                "Craft material for kids projects",
            ]),
            educational_facts: strings(&[
                "Foam cups are about 95% air, which makes recycling uneconomical",
                "Polystyrene can persist in the environment for centuries",
                "Many cities have banned foam food containers",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contains_required_examples() {
        let catalog = FallbackCatalog::new();
        let find = |name: &str| {
            catalog
                .entries()
                .iter()
                .find(|entry| entry.object_name == name)
                .map(|entry| entry.classification)
        };

        assert_eq!(find("Plastic Water Bottle"), Some(Classification::Recyclable));
        assert_eq!(find("Glass Jar"), Some(Classification::Reusable));
        assert_eq!(find("Aluminum Can"), Some(Classification::Recyclable));
    }

    #[test]
    fn test_fixed_selector_is_deterministic() {
        let catalog = FallbackCatalog::with_selector(FixedSelector(1));
        assert_eq!(catalog.example().object_name, "Glass Jar");
        assert_eq!(catalog.example().object_name, "Glass Jar");
    }

    #[test]
    fn test_fixed_selector_wraps() {
        let catalog = FallbackCatalog::with_selector(FixedSelector(7));
        let len = catalog.entries().len();
        assert_eq!(catalog.example(), catalog.entries()[7 % len]);
    }

    #[test]
    fn test_random_selection_stays_in_catalog() {
        let catalog = FallbackCatalog::new();
        for _ in 0..50 {
            let example = catalog.example();
            assert!(catalog.entries().contains(&example));
        }
    }

    #[test]
    fn test_entries_are_fully_populated() {
        for entry in FallbackCatalog::new().entries() {
            assert!(!entry.object_name.is_empty());
            assert!(entry.confidence <= 100);
            assert!(!entry.materials.is_empty());
            assert!(!entry.disposal_tips.is_empty());
            assert!(!entry.reuse_suggestions.is_empty());
            assert!(!entry.educational_facts.is_empty());
        }
    }
}
