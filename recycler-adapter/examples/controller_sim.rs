// Example: a Controller owning a MemoryHost, driven by raw scroll and mutation events.
use recycler::RecyclerOptions;
use recycler_adapter::{Controller, MemoryHost, MemorySlot};

fn dump(label: &str, controller: &Controller<MemoryHost>) {
    print!(
        "{label:<16} window {:?} cells [",
        controller.recycler().window()
    );
    controller
        .recycler()
        .for_each_cell(|cell| print!(" {}", cell.logical_index));
    println!(" ]");
}

fn main() {
    let options = RecyclerOptions::new(
        50,
        90.0,
        10.0,
        |index, slot: &mut MemorySlot| slot.item = Some(index),
        |slot: &mut MemorySlot| slot.item = None,
    );
    let mut controller =
        Controller::new(options, MemoryHost::new(400.0)).expect("valid config");
    dump("init", &controller);

    controller.on_scroll(450.0);
    dump("scroll 450", &controller);

    controller.remove_cell_at(5).expect("index in pool");
    dump("remove 5", &controller);

    controller.reset();
    dump("reset", &controller);

    controller.add_cell_at_top();
    dump("insert head", &controller);

    println!(
        "batches={} positions={} extent={}",
        controller.host().batches_applied(),
        controller.host().positions_applied(),
        controller.host().content_extent()
    );
}
