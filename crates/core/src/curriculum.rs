//! Fixed curriculum tables and the materializer that projects them through a
//! progress record into per-level unlock state.

use crate::model::{LevelDefinition, LevelId, MaterializedLevel, ProgressRecord, Track};

/// Shared path for the general-purpose language tracks (Python, JavaScript,
/// C++, Java). Stored order defines the sequence.
const GENERIC_LEVELS: [LevelDefinition; 20] = [
    LevelDefinition::new(
        1,
        "Hello World Protocol",
        "Initialize communications. Learn basic syntax and output.",
        "Printing output and basic syntax",
    ),
    LevelDefinition::new(
        2,
        "Data Vaults",
        "Secure storage for primitive data.",
        "Variables and Data Types (Strings, Integers)",
    ),
    LevelDefinition::new(
        3,
        "Neural Arithmetic",
        "Process numeric calculations in the core.",
        "Basic Arithmetic and Math Operations",
    ),
    LevelDefinition::new(
        4,
        "Type Mutation",
        "Convert data forms to bypass security filters.",
        "Type Casting and Conversion",
    ),
    LevelDefinition::new(
        5,
        "Logic Gates",
        "Establish decision pathways.",
        "If/Else Conditionals",
    ),
    LevelDefinition::new(
        6,
        "Binary Nexus",
        "Complex decision trees using boolean logic.",
        "Logical Operators (AND, OR, NOT)",
    ),
    LevelDefinition::new(
        7,
        "Loop Cycles: Alpha",
        "Automate tasks with conditional repetition.",
        "While Loops",
    ),
    LevelDefinition::new(
        8,
        "Loop Cycles: Beta",
        "Iterate through defined sequences.",
        "For Loops",
    ),
    LevelDefinition::new(
        9,
        "Data Arrays",
        "Structure multiple data points in linear formations.",
        "Introduction to Arrays/Lists",
    ),
    LevelDefinition::new(
        10,
        "Array Manipulation",
        "Modify the contents of data structures.",
        "List/Array Methods (Add, Remove, Sort)",
    ),
    LevelDefinition::new(
        11,
        "Sequence Traversal",
        "Process every item in a data stream.",
        "Iterating over Arrays/Lists",
    ),
    LevelDefinition::new(
        12,
        "Function Modules",
        "Encapsulate code for reusable subroutines.",
        "Defining Functions",
    ),
    LevelDefinition::new(
        13,
        "Parameter Injection",
        "Pass dynamic data into locked modules.",
        "Function Parameters and Arguments",
    ),
    LevelDefinition::new(
        14,
        "Return Signals",
        "Extract results from processed functions.",
        "Return Values",
    ),
    LevelDefinition::new(
        15,
        "Key-Value Storage",
        "Map data to specific access keys.",
        "Dictionaries / Hash Maps / Objects",
    ),
    LevelDefinition::new(
        16,
        "String Decoding",
        "Analyze and manipulate text patterns.",
        "String Manipulation Methods",
    ),
    LevelDefinition::new(
        17,
        "Object Blueprints",
        "Design complex data structures.",
        "Classes and Objects (OOP Basics)",
    ),
    LevelDefinition::new(
        18,
        "Method Protocols",
        "Define behaviors for your objects.",
        "Class Methods",
    ),
    LevelDefinition::new(
        19,
        "Exception Shields",
        "Protect the system from critical failures.",
        "Error Handling (Try/Catch/Except)",
    ),
    LevelDefinition::new(
        20,
        "Recursive Loop",
        "Self-referential algorithms for deep solving.",
        "Recursion and Base Cases",
    ),
];

const HTML_LEVELS: [LevelDefinition; 20] = [
    LevelDefinition::new(
        1,
        "The Skeleton",
        "Construct the basic anatomy of a web document.",
        "HTML Basic Structure (html, head, body)",
    ),
    LevelDefinition::new(
        2,
        "Headline Signals",
        "Broadcast hierarchy with header tags.",
        "Headings (h1-h6) and Paragraphs",
    ),
    LevelDefinition::new(
        3,
        "Hyperlink Grid",
        "Connect nodes within the network.",
        "Anchor tags and Href attributes",
    ),
    LevelDefinition::new(
        4,
        "Visual Assets",
        "Embed static imagery into the display.",
        "Image tags and Source attributes",
    ),
    LevelDefinition::new(
        5,
        "Ordered Data",
        "Structure information in sequence.",
        "Ordered and Unordered Lists",
    ),
    LevelDefinition::new(
        6,
        "Div Containers",
        "Create generic storage units for content.",
        "Divs and Spans",
    ),
    LevelDefinition::new(
        7,
        "ID Signatures",
        "Assign unique identifiers to elements.",
        "ID and Class attributes",
    ),
    LevelDefinition::new(
        8,
        "Data Grids",
        "Organize complex data into tabular formats.",
        "Tables (tr, td, th)",
    ),
    LevelDefinition::new(
        9,
        "Input Terminals",
        "Create entry points for user data.",
        "Forms and Input fields",
    ),
    LevelDefinition::new(
        10,
        "Selection Nodes",
        "Implement multiple choice interfaces.",
        "Checkboxes and Radio buttons",
    ),
    LevelDefinition::new(
        11,
        "Semantic Header",
        "Define the top-level navigation zone.",
        "Semantic HTML: Header and Nav",
    ),
    LevelDefinition::new(
        12,
        "Content Blocks",
        "Isolate independent content modules.",
        "Semantic HTML: Article and Section",
    ),
    LevelDefinition::new(
        13,
        "Media Streams",
        "Embed audio and video feeds.",
        "Audio and Video tags",
    ),
    LevelDefinition::new(
        14,
        "Meta Data",
        "Configure the document's hidden properties.",
        "Meta tags and Charset",
    ),
    LevelDefinition::new(
        15,
        "Form Types",
        "Specialized input validation fields.",
        "Input types (email, password, date)",
    ),
    LevelDefinition::new(
        16,
        "External Portals",
        "Embed remote content windows.",
        "Iframes and Embeds",
    ),
    LevelDefinition::new(
        17,
        "Table Headers",
        "Advanced data organization.",
        "Thead, Tbody, Tfoot",
    ),
    LevelDefinition::new(
        18,
        "Interactive Details",
        "Create collapsible information widgets.",
        "Details and Summary tags",
    ),
    LevelDefinition::new(
        19,
        "Script Injection",
        "Link to executable logic files.",
        "Linking Scripts and Stylesheets",
    ),
    LevelDefinition::new(
        20,
        "Portfolio Nexus",
        "Compile all modules into a personal identity hub.",
        "Final Project: Building a complete personal portfolio page structure",
    ),
];

const APP_DESIGN_LEVELS: [LevelDefinition; 20] = [
    LevelDefinition::new(
        1,
        "Concept Origin",
        "Define the application purpose and scope.",
        "Requirements Gathering and Comments/Docstrings",
    ),
    LevelDefinition::new(
        2,
        "Data Modeling",
        "Architect the core data structures.",
        "Defining Data Structures/Classes for Users",
    ),
    LevelDefinition::new(
        3,
        "UI Blueprint",
        "Draft the visual layout logic.",
        "Pseudocode for UI Layout Components",
    ),
    LevelDefinition::new(
        4,
        "Event Horizon",
        "Map user interactions to logic triggers.",
        "Event Listeners and Handlers",
    ),
    LevelDefinition::new(
        5,
        "State Core",
        "Design the central memory management.",
        "State Management Concepts",
    ),
    LevelDefinition::new(
        6,
        "Nav Protocol",
        "Route users between interface modules.",
        "Routing Logic and Navigation",
    ),
    LevelDefinition::new(
        7,
        "API Gateway",
        "Setup communication channels with the cloud.",
        "Mocking API Requests (GET)",
    ),
    LevelDefinition::new(
        8,
        "Auth Shield",
        "Implement security login protocols.",
        "Authentication Logic Flow",
    ),
    LevelDefinition::new(
        9,
        "Schema Design",
        "Structure the persistent storage layer.",
        "Database Schema Design (Mock SQL/NoSQL)",
    ),
    LevelDefinition::new(
        10,
        "Create Ops",
        "Implement data insertion logic.",
        "CRUD: Create Operations",
    ),
    LevelDefinition::new(
        11,
        "Read Ops",
        "Implement data retrieval systems.",
        "CRUD: Read Operations",
    ),
    LevelDefinition::new(
        12,
        "Update Ops",
        "Implement data modification systems.",
        "CRUD: Update and Delete",
    ),
    LevelDefinition::new(
        13,
        "Error Guards",
        "Fortify against crash conditions.",
        "Validation and Error Boundaries",
    ),
    LevelDefinition::new(
        14,
        "Async Loader",
        "Handle latency in data transmission.",
        "Asynchronous Programming Patterns",
    ),
    LevelDefinition::new(
        15,
        "Local Cache",
        "Implement client-side persistence.",
        "Local Storage / Caching Logic",
    ),
    LevelDefinition::new(
        16,
        "Service Uplink",
        "Integrate third-party functional modules.",
        "Integrating External Services",
    ),
    LevelDefinition::new(
        17,
        "Security Patch",
        "Sanitize inputs against injection attacks.",
        "Security Best Practices (Sanitization)",
    ),
    LevelDefinition::new(
        18,
        "Opti-Prime",
        "Refine code for maximum efficiency.",
        "Performance Optimization Logic",
    ),
    LevelDefinition::new(
        19,
        "Build Config",
        "Prepare the asset bundle for deployment.",
        "Build Scripts and Configuration",
    ),
    LevelDefinition::new(
        20,
        "Deploy Launch",
        "Finalize and export the master executable.",
        "Final Project: Assembly and Deployment Configuration",
    ),
];

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The fixed, ordered list of level definitions for one track.
///
/// Only the built-in tables above are reachable through [`Catalog::for_track`],
/// so a catalog always holds at least one level.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    levels: &'static [LevelDefinition],
}

impl Catalog {
    const fn new(levels: &'static [LevelDefinition]) -> Self {
        Self { levels }
    }

    /// Curriculum for the given track. The generic path backs every plain
    /// language track; HTML and app design have their own tables.
    #[must_use]
    pub fn for_track(track: Track) -> Self {
        match track {
            Track::Html => Self::new(&HTML_LEVELS),
            Track::AppDesign => Self::new(&APP_DESIGN_LEVELS),
            Track::Python | Track::JavaScript | Track::Cpp | Track::Java => {
                Self::new(&GENERIC_LEVELS)
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn levels(&self) -> &'static [LevelDefinition] {
        self.levels
    }

    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&'static LevelDefinition> {
        self.levels.get(ordinal)
    }

    /// Ordinal of the level with the given id, if it exists in this catalog.
    #[must_use]
    pub fn position_of(&self, id: LevelId) -> Option<usize> {
        self.levels.iter().position(|level| level.id() == id)
    }

    /// Project every level through the progress record into its current
    /// unlock state. Recomputed on every call so the flags cannot go stale.
    #[must_use]
    pub fn materialize(&self, progress: &ProgressRecord) -> Vec<MaterializedLevel> {
        self.levels
            .iter()
            .enumerate()
            .map(|(ordinal, definition)| {
                MaterializedLevel::new(definition, ordinal, progress.status_of(ordinal))
            })
            .collect()
    }

    /// Materialize the level with the given id, failing over to the first
    /// level when the id does not exist in this catalog. The failover guards
    /// against an id left over from a previously selected track.
    #[must_use]
    pub fn resolve(&self, progress: &ProgressRecord, id: LevelId) -> MaterializedLevel {
        let ordinal = self.position_of(id).unwrap_or(0);
        // Built-in catalogs are never empty, so ordinal 0 always exists.
        let definition = &self.levels[ordinal];
        MaterializedLevel::new(definition, ordinal, progress.status_of(ordinal))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelStatus;

    #[test]
    fn every_track_has_twenty_levels() {
        for track in Track::ALL {
            let catalog = Catalog::for_track(track);
            assert_eq!(catalog.len(), 20, "{track} catalog size");
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn ids_are_dense_and_stored_in_ascending_order() {
        for track in Track::ALL {
            let catalog = Catalog::for_track(track);
            for (ordinal, level) in catalog.levels().iter().enumerate() {
                let expected = u32::try_from(ordinal).unwrap() + 1;
                assert_eq!(level.id(), LevelId::new(expected), "{track} ordinal {ordinal}");
            }
        }
    }

    #[test]
    fn language_tracks_share_the_generic_path() {
        let python = Catalog::for_track(Track::Python);
        let java = Catalog::for_track(Track::Java);
        assert_eq!(python.levels(), java.levels());

        let html = Catalog::for_track(Track::Html);
        assert_ne!(python.levels(), html.levels());
    }

    #[test]
    fn materialize_partitions_every_unlock_count() {
        for track in Track::ALL {
            let catalog = Catalog::for_track(track);
            let n = catalog.len();
            let mut progress = ProgressRecord::new(track);
            for u in 0..=n {
                let levels = catalog.materialize(&progress);
                assert_eq!(levels.len(), n);

                let completed = levels.iter().filter(|l| l.is_completed()).count();
                let frontier = levels
                    .iter()
                    .filter(|l| !l.is_locked() && !l.is_completed())
                    .count();
                let locked = levels.iter().filter(|l| l.is_locked()).count();

                assert_eq!(completed, u);
                assert_eq!(frontier, if u < n { 1 } else { 0 });
                assert_eq!(locked, n - u - frontier);

                if u < n {
                    progress = progress.advance(u);
                }
            }
        }
    }

    #[test]
    fn completing_the_first_level_moves_the_frontier() {
        let catalog = Catalog::for_track(Track::Python);
        let progress = ProgressRecord::new(Track::Python).advance(0);
        let levels = catalog.materialize(&progress);

        assert!(levels[0].is_completed());
        assert_eq!(levels[1].status(), LevelStatus::Frontier);
        assert!(levels[2..].iter().all(MaterializedLevel::is_locked));
    }

    #[test]
    fn skipping_ahead_leaves_everything_unchanged() {
        let catalog = Catalog::for_track(Track::Python);
        let progress = ProgressRecord::new(Track::Python).advance(0);
        assert_eq!(progress.unlocked_count(), 1);

        let after = progress.advance(5);
        assert_eq!(after, progress);
        assert!(catalog.materialize(&after)[5].is_locked());
    }

    #[test]
    fn completing_the_whole_track_reaches_the_terminal_state() {
        let catalog = Catalog::for_track(Track::Html);
        let mut progress = ProgressRecord::new(Track::Html);
        for ordinal in 0..catalog.len() {
            progress = progress.advance(ordinal);
        }
        assert_eq!(progress.unlocked_count() as usize, catalog.len());

        let levels = catalog.materialize(&progress);
        assert!(levels.iter().all(MaterializedLevel::is_completed));
        assert!(!levels.iter().any(|l| l.is_locked()));
    }

    #[test]
    fn resolve_finds_levels_by_id_not_ordinal() {
        let catalog = Catalog::for_track(Track::Python);
        let progress = ProgressRecord::new(Track::Python);
        let level = catalog.resolve(&progress, LevelId::new(3));
        assert_eq!(level.ordinal(), 2);
        assert_eq!(level.title(), "Neural Arithmetic");
        assert_eq!(catalog.get(2), Some(level.definition()));
    }

    #[test]
    fn resolve_falls_back_to_the_first_level_for_unknown_ids() {
        let catalog = Catalog::for_track(Track::Html);
        let progress = ProgressRecord::new(Track::Html);
        let level = catalog.resolve(&progress, LevelId::new(99));
        assert_eq!(level.ordinal(), 0);
        assert_eq!(level.title(), "The Skeleton");
        assert_eq!(level.status(), LevelStatus::Frontier);
    }
}
