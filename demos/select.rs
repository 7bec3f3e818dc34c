//! termform demo - a dropdown and a slider wired into a terminal event loop

use anyhow::Result;
use std::time::Duration;
use termform::{
    component::Component,
    components::{Dropdown, Slider},
    context::RenderContext,
    event::{Event, EventHandler, EventPoller, Key},
    layout::Rect,
    options::{Children, OptionDescriptor, Section},
    outside, Renderer, Theme,
};

fn main() -> Result<()> {
    // Create renderer and theme
    let mut renderer = Renderer::new()?;
    let caps = renderer.context().capabilities;
    let theme = Theme::dark(caps);
    renderer.enter_alt_screen()?;
    renderer.hide_cursor()?;
    renderer.clear()?;

    // Create event poller
    let events = EventPoller::new()?;

    // Fruit picker, grouped into sections that flatten into one list
    let children = Children::Sectioned(vec![
        Section::new(vec![
            OptionDescriptor::new("1", "Apples", "apples"),
            OptionDescriptor::new("2", "Pears", "pears").selected(),
        ]),
        Section::new(vec![
            OptionDescriptor::new("3", "Oranges", "oranges"),
            OptionDescriptor::new("4", "Lemons", "lemons"),
        ]),
    ]);

    let mut dropdown = Dropdown::new(children)
        .with_default_text("Pick a fruit...")
        .with_width(24)
        .on_changed(|opt| {
            // a real host would persist the selection here
            let _ = opt;
        });
    dropdown.set_focused(true);

    let mut slider = Slider::new(0.0, 100.0).with_step(5.0).with_width(24);

    // Tab toggles which control has keyboard focus
    let mut dropdown_focused = true;

    loop {
        let (cols, rows) = renderer.context().char_dimensions();
        let bounds = Rect::fullscreen(cols, rows);
        let ctx = RenderContext::new(&theme);

        renderer.clear()?;
        renderer.move_cursor(2, 1)?;
        renderer.write_text("termform demo - Tab switches controls, q quits")?;
        renderer.move_cursor(2, 2)?;
        renderer.write_repeated('─', 46)?;
        dropdown.render(&mut renderer, Rect::new(2, 3, bounds.width - 2, 10), &ctx)?;
        slider.render(&mut renderer, Rect::new(2, 14, bounds.width - 2, 1), &ctx)?;
        renderer.flush()?;

        let Some(event) = events.poll(Duration::from_millis(16))? else {
            continue;
        };

        match event {
            Event::Key(Key::Char('q')) | Event::Key(Key::Ctrl('c')) => break,
            Event::Key(Key::Tab) => {
                dropdown_focused = !dropdown_focused;
                dropdown.set_focused(dropdown_focused);
                slider.set_focused(!dropdown_focused);
            }
            Event::Resize(_, _) => {
                renderer.refresh_geometry()?;
                dropdown.mark_dirty();
                slider.mark_dirty();
            }
            ref event => {
                let consumed =
                    dropdown.handle_event(event) || slider.handle_event(event);

                // every press also feeds the shared click-outside stream
                if let Some((col, row)) = event.press_position() {
                    outside::dispatch_click(col, row);
                }
                let _ = consumed;
            }
        }
    }

    renderer.exit_alt_screen()?;
    renderer.show_cursor()?;

    if let Some(selected) = dropdown.selected() {
        println!("you picked: {} ({})", selected.label, selected.value);
    }
    println!("slider at {:.0}%", slider.percentage());
    Ok(())
}
