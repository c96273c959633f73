// Example: head insertion and removal re-index the pool without creating or dropping cells.
use recycler::{PositionUpdate, Recycler, RecyclerOptions, ViewHost};

#[derive(Clone, Debug, Default)]
struct Row {
    position: f32,
    visible: bool,
    label: Option<usize>,
}

struct SimHost {
    scroll_offset: f32,
    content_extent: f32,
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

    fn set_content_extent(&mut self, extent: f32) {
        self.content_extent = extent;
    }
}

fn dump(label: &str, host: &SimHost, list: &Recycler<SimHost>) {
    print!("{label:<18} items={:>2} extent={:>6} [", list.item_count(), host.content_extent);
    list.for_each_cell(|cell| print!(" {}", cell.logical_index));
    println!(" ]");
}

fn main() {
    let mut host = SimHost {
        scroll_offset: 0.0,
        content_extent: 0.0,
    };
    let options = RecyclerOptions::new(
        10,
        90.0,
        10.0,
        |index, row: &mut Row| row.label = Some(index),
        |row: &mut Row| row.label = None,
    );
    let mut list = Recycler::new(options, &mut host).expect("valid config");
    dump("init", &host, &list);

    list.add_cell_at_top(&mut host);
    dump("add_cell_at_top", &host, &list);

    list.remove_cell_at(0, &mut host).expect("index in pool");
    dump("remove_cell_at(0)", &host, &list);

    list.remove_cell_at(3, &mut host).expect("index in pool");
    dump("remove_cell_at(3)", &host, &list);
}
