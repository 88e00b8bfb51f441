use crate::canvas::Snapshot;

/// Bounded undo history of full-surface snapshots.
///
/// `snapshots[step]` always equals what is currently on screen. Recording
/// discards any entries past the cursor (there is no redo), and once the
/// capacity is reached the oldest entry is evicted so long sessions stay
/// bounded; eviction moves the cursor in lockstep so the invariant
/// `step < len` holds throughout.
pub struct SnapshotHistory {
    snapshots: Vec<Snapshot>,
    step: usize,
    capacity: usize,
}

impl SnapshotHistory {
    /// Creates a history seeded with the initial (blank) surface.
    pub fn new(capacity: usize, seed: Snapshot) -> Self {
        Self {
            snapshots: vec![seed],
            step: 0,
            capacity: capacity.max(1),
        }
    }

    /// Appends a snapshot at `step + 1`, dropping any overwritten future
    /// entries, and evicts the oldest entry past capacity.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(snapshot);
        self.step += 1;
        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
            self.step -= 1;
            log::debug!("history full, evicted oldest snapshot");
        }
    }

    /// Steps the cursor back and returns the snapshot to repaint, or `None`
    /// when already at the oldest retained state.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.step == 0 {
            return None;
        }
        self.step -= 1;
        Some(self.snapshots[self.step].clone())
    }

    /// Drops everything and reseeds with a single entry.
    pub fn reset(&mut self, seed: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(seed);
        self.step = 0;
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
