use std::cell::RefCell;
use std::rc::Rc;

use scatter::ScatterOptions;
use scatter_adapter::{Controller, ControllerOptions, Mount, Region, ViewportProgress};

fn main() {
    // Example: a host frame loop driving a mount.
    //
    // An adapter would:
    // - report the tracked region's geometry on every scroll/resize event
    // - call tick(now_ms) once per animation frame
    // - render the returned frame (glyph transforms + current greeting)
    // - drop the mount when the component goes away
    let source = Rc::new(RefCell::new(ViewportProgress::default()));
    let options = ControllerOptions::new(ScatterOptions::new(
        "\"Together, we write the future.\"",
    ));
    let controller = Controller::new(options).expect("valid options");
    let mut mount = Mount::attach(Rc::clone(&source), controller, 0);

    let viewport = 800.0;
    let region_size = 1200.0;
    let mut top = viewport;
    let mut now_ms = 0u64;
    while top > -region_size {
        now_ms += 16;
        top -= 12.0;
        source
            .borrow_mut()
            .on_layout(Region::new(top, region_size), viewport);
        if mount.tick(now_ms) && now_ms % 480 == 0 {
            let frame = mount.frame();
            let first = frame.glyphs.first().map(|g| g.transform);
            println!(
                "t={now_ms} greeting={} progress={:.3} first={first:?}",
                frame.greeting.text,
                mount.controller().text().progress().get()
            );
        }
    }

    println!("settled={}", mount.controller().text().is_settled());
    mount.unmount();
    println!("listeners={}", source.borrow().listener_count());
}
