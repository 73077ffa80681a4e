//! Tests for long operation sequences
//!
//! This tests:
//! - Undoing a whole sequence restores the starting document
//! - Redo after undo, and redo being dropped by a new edit
//! - Reorder being reversible on adjacent blocks
//! - Duplicate placement and identity

use pageforge_editor::{Composer, Document, NodeId, Props};
use pageforge_document::IdGenerator;
use serde_json::json;

fn composer() -> Composer {
    Composer::new(Document::new(), IdGenerator::new("sequence"))
}

fn order(composer: &Composer) -> Vec<NodeId> {
    composer.document().ids()
}

/// Small deterministic generator so sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

/// Run `steps` random operations, returning how many of them committed
fn random_edits(composer: &mut Composer, rng: &mut Lcg, steps: usize) -> usize {
    const TYPES: [&str; 5] = ["hero", "footer", "gallery", "pricing", "mystery"];
    let mut commits = 0;

    for step in 0..steps {
        let ids = order(composer);
        let pick = |rng: &mut Lcg| ids.get(rng.next(ids.len())).map(|id| id.to_string());

        let committed = match rng.next(4) {
            0 => composer.insert_from_palette(TYPES[rng.next(TYPES.len())]).is_some(),
            1 => match pick(rng) {
                Some(id) => composer.update_props(
                    &id,
                    json!({ "title": format!("step {}", step), "items": [{ "n": step }] })
                        .as_object()
                        .cloned()
                        .unwrap(),
                ),
                None => false,
            },
            2 => match pick(rng) {
                Some(id) => composer.delete_node(&id),
                None => false,
            },
            _ => match (pick(rng), pick(rng)) {
                (Some(a), Some(b)) => composer.reorder(&a, &b),
                _ => false,
            },
        };

        if committed {
            commits += 1;
            assert!(composer.can_undo());
        }
    }

    commits
}

#[test]
fn test_undo_every_commit_restores_start() {
    for seed in 1..=20 {
        let mut composer = composer();
        let mut rng = Lcg(seed);

        // Start from a non-empty document
        random_edits(&mut composer, &mut rng, 5);
        let start = composer.document().clone();

        let commits = random_edits(&mut composer, &mut rng, 40);
        for _ in 0..commits {
            assert!(composer.undo());
        }

        assert_eq!(composer.document(), &start, "seed {}", seed);
    }
}

#[test]
fn test_redo_restores_pre_undo_document() {
    let mut composer = composer();
    let mut rng = Lcg(7);
    random_edits(&mut composer, &mut rng, 20);

    let latest = composer.document().clone();
    assert!(composer.undo());
    assert!(composer.redo());
    assert_eq!(composer.document(), &latest);
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut composer = composer();
    composer.insert_from_palette("hero");
    composer.insert_from_palette("footer");

    composer.undo();
    assert!(composer.can_redo());

    composer.insert_from_palette("gallery");
    assert!(!composer.can_redo());
    assert!(!composer.redo());
}

#[test]
fn test_adjacent_reorder_is_reversible() {
    let mut composer = composer();
    for block_type in ["navigation", "hero", "products", "footer"] {
        composer.insert_from_palette(block_type);
    }
    let original = order(&composer);

    for pair in original.windows(2) {
        let (a, b) = (pair[0].as_str(), pair[1].as_str());
        assert!(composer.reorder(a, b));
        assert!(composer.reorder(b, a));
        assert_eq!(order(&composer), original);
    }
}

#[test]
fn test_duplicate_sits_after_source_with_same_props() {
    let mut composer = composer();
    composer.insert_from_palette("hero");
    let gallery = composer.insert_from_palette("gallery").unwrap();
    composer.insert_from_palette("footer");

    composer.update_props(
        gallery.as_str(),
        json!({ "images": [{ "src": "a.png" }, { "src": "b.png" }] }).as_object().cloned().unwrap(),
    );

    let copy = composer.duplicate_node(gallery.as_str()).unwrap();
    let doc = composer.document();

    assert_ne!(copy, gallery);
    assert_eq!(doc.position(copy.as_str()), Some(doc.position(gallery.as_str()).unwrap() + 1));
    assert_eq!(doc.get(copy.as_str()).unwrap().props(), doc.get(gallery.as_str()).unwrap().props());

    // Editing the copy leaves the original alone
    composer.update_props(copy.as_str(), json!({ "images": [] }).as_object().cloned().unwrap());
    assert_eq!(
        composer.document().get(gallery.as_str()).unwrap().prop("images").unwrap().as_array().unwrap().len(),
        2
    );
}

#[test]
fn test_update_props_with_empty_partial_still_commits() {
    let mut composer = composer();
    let hero = composer.insert_from_palette("hero").unwrap();
    let depth = composer.history().len();

    assert!(composer.update_props(hero.as_str(), Props::new()));
    assert_eq!(composer.history().len(), depth + 1);
}

#[test]
fn test_capped_history_keeps_latest_states() {
    let mut composer = Composer::with_max_history(Document::new(), IdGenerator::new("capped"), 3);
    for _ in 0..5 {
        composer.insert_from_palette("text");
    }

    assert_eq!(composer.history().len(), 3);
    assert!(composer.undo());
    assert!(composer.undo());
    assert!(!composer.undo());
    assert_eq!(composer.document().len(), 3);
}
