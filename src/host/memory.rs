//! In-memory host
//!
//! Keeps grids, open windows and played sounds in process memory. Useful for
//! tests and for driving menus without a server.

use super::{GridHandle, MenuHost, Sound, ViewerId};
use crate::item::ItemStack;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct MemoryGrid {
    title: String,
    slots: Vec<Option<ItemStack>>,
}

#[derive(Debug, Default)]
struct MemoryHostState {
    next_grid: u64,
    grids: FxHashMap<GridHandle, MemoryGrid>,
    open: FxHashMap<ViewerId, GridHandle>,
    opened: Vec<(ViewerId, GridHandle)>,
    sounds: Vec<(ViewerId, Sound)>,
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    state: Mutex<MemoryHostState>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item rendered at `slot`, if any
    pub fn item(&self, grid: GridHandle, slot: usize) -> Option<ItemStack> {
        let state = self.state.lock();
        state
            .grids
            .get(&grid)
            .and_then(|g| g.slots.get(slot).cloned().flatten())
    }

    /// Copy of every slot of `grid`
    pub fn snapshot(&self, grid: GridHandle) -> Option<Vec<Option<ItemStack>>> {
        self.state.lock().grids.get(&grid).map(|g| g.slots.clone())
    }

    pub fn title(&self, grid: GridHandle) -> Option<String> {
        self.state.lock().grids.get(&grid).map(|g| g.title.clone())
    }

    pub fn grid_size(&self, grid: GridHandle) -> Option<usize> {
        self.state.lock().grids.get(&grid).map(|g| g.slots.len())
    }

    /// Number of grids currently allocated and not released
    pub fn live_grids(&self) -> usize {
        self.state.lock().grids.len()
    }

    /// How many times `viewer` has had a grid opened for them
    pub fn open_count(&self, viewer: ViewerId) -> usize {
        self.state
            .lock()
            .opened
            .iter()
            .filter(|(v, _)| *v == viewer)
            .count()
    }

    pub fn sounds_played(&self, viewer: ViewerId) -> Vec<Sound> {
        self.state
            .lock()
            .sounds
            .iter()
            .filter(|(v, _)| *v == viewer)
            .map(|(_, sound)| sound.clone())
            .collect()
    }
}

impl MenuHost for MemoryHost {
    fn allocate_grid(&self, size: usize, title: &str) -> GridHandle {
        let mut state = self.state.lock();
        let handle = GridHandle(state.next_grid);
        state.next_grid += 1;
        state.grids.insert(
            handle,
            MemoryGrid {
                title: title.to_string(),
                slots: vec![None; size],
            },
        );
        log::trace!("[MemoryHost] Allocated {:?} ({} slots, '{}')", handle, size, title);
        handle
    }

    fn open_grid(&self, viewer: ViewerId, grid: GridHandle) {
        let mut state = self.state.lock();
        if !state.grids.contains_key(&grid) {
            log::warn!("[MemoryHost] {:?} asked to open unknown {:?}", viewer, grid);
            return;
        }
        state.open.insert(viewer, grid);
        state.opened.push((viewer, grid));
    }

    fn close_grid(&self, viewer: ViewerId) {
        self.state.lock().open.remove(&viewer);
    }

    fn top_open_grid(&self, viewer: ViewerId) -> Option<GridHandle> {
        self.state.lock().open.get(&viewer).copied()
    }

    fn play_sound(&self, viewer: ViewerId, sound: &Sound) {
        self.state.lock().sounds.push((viewer, sound.clone()));
    }

    fn set_item(&self, grid: GridHandle, slot: usize, item: Option<&ItemStack>) {
        let mut state = self.state.lock();
        match state.grids.get_mut(&grid).and_then(|g| g.slots.get_mut(slot)) {
            Some(cell) => *cell = item.cloned(),
            None => log::warn!("[MemoryHost] Ignoring item for slot {} of {:?}", slot, grid),
        }
    }

    fn clear_grid(&self, grid: GridHandle) {
        if let Some(g) = self.state.lock().grids.get_mut(&grid) {
            g.slots.iter_mut().for_each(|cell| *cell = None);
        }
    }

    fn release_grid(&self, grid: GridHandle) {
        let mut state = self.state.lock();
        state.grids.remove(&grid);
        state.open.retain(|_, open| *open != grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_top_grid() {
        let host = MemoryHost::new();
        let viewer = ViewerId(1);
        let a = host.allocate_grid(9, "a");
        let b = host.allocate_grid(9, "b");

        host.open_grid(viewer, a);
        host.open_grid(viewer, b);
        assert_eq!(host.top_open_grid(viewer), Some(b));
        assert_eq!(host.open_count(viewer), 2);

        host.close_grid(viewer);
        assert_eq!(host.top_open_grid(viewer), None);
    }

    #[test]
    fn test_set_item_out_of_range_ignored() {
        let host = MemoryHost::new();
        let grid = host.allocate_grid(9, "t");
        let item = ItemStack::single("stone");

        host.set_item(grid, 9, Some(&item));
        host.set_item(grid, 8, Some(&item));

        assert_eq!(host.item(grid, 8), Some(item));
        assert_eq!(host.snapshot(grid).unwrap().iter().flatten().count(), 1);
    }

    #[test]
    fn test_release_closes_window() {
        let host = MemoryHost::new();
        let viewer = ViewerId(3);
        let grid = host.allocate_grid(27, "t");
        host.open_grid(viewer, grid);

        host.release_grid(grid);
        assert_eq!(host.top_open_grid(viewer), None);
        assert_eq!(host.live_grids(), 0);
    }
}
