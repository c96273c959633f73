// Example: drive the engine with a minimal in-memory host and watch cells recycle.
use recycler::{PositionUpdate, Recycler, RecyclerOptions, ViewHost};

#[derive(Clone, Debug, Default)]
struct Row {
    position: f32,
    visible: bool,
    label: Option<usize>,
}

struct SimHost {
    scroll_offset: f32,
}

impl ViewHost for SimHost {
    type Handle = Row;

    fn create_cell(&mut self, _slot: usize, _group: Option<usize>) -> Row {
        Row::default()
    }

    fn viewport_extent(&self) -> f32 {
        400.0
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    fn set_visible(&mut self, handle: &mut Row, visible: bool) {
        handle.visible = visible;
    }

    fn apply_positions(&mut self, batch: &mut [PositionUpdate<'_, Row>]) {
        for update in batch.iter_mut() {
            update.handle.position = update.position;
        }
    }

    fn set_content_extent(&mut self, _extent: f32) {}
}

fn main() {
    let mut host = SimHost { scroll_offset: 0.0 };
    let options = RecyclerOptions::new(
        1_000_000,
        90.0,
        10.0,
        |index, row: &mut Row| row.label = Some(index),
        |row: &mut Row| row.label = None,
    );
    let mut list = Recycler::new(options, &mut host).expect("valid config");

    println!("items={} pool={}", list.item_count(), list.pool_len());

    for offset in [0.0, 150.0, 450.0, 200.0] {
        host.scroll_offset = offset;
        list.on_scroll_offset_changed(&mut host);
        print!("offset {offset:>5}: window {:?} cells [", list.window());
        list.for_each_cell(|cell| print!(" {}", cell.logical_index));
        println!(" ]");
    }
}
