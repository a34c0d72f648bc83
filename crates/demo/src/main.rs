//! Scripted walk-through of a three-page shop menu.
//!
//! Drives the menu against the in-memory host the way a server would: the
//! player opens the menu, clicks through to a purchase, tries to escape a
//! confirmation page that forbids closing, and finally exits.
//!
//! ```bash
//! RUST_LOG=chest_gui=debug cargo run -p chest-gui-demo
//! ```

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use chest_gui::{
    ClickOutcome, ClickType, CloseOutcome, GuiConfig, GuiManager, Item, ItemFlags, MemoryHost,
    Page, PlayerId,
};

const PLAYER: PlayerId = PlayerId(1);

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GuiConfig::from_env();
    let purchases = Rc::new(Cell::new(0u32));
    let menu = build_menu(&config, &purchases)?;

    let mut host = MemoryHost::new();
    let mut manager = GuiManager::new();

    manager.session(PLAYER).open(&mut host, &menu.home);
    report(&manager, "opened home");

    click(&mut manager, &mut host, 11, ClickType::Left)?;
    report(&manager, "clicked shop");

    click(&mut manager, &mut host, 13, ClickType::ShiftLeft)?;
    report(&manager, "picked sword");

    let escape = host
        .player_close(PLAYER)
        .context("player should be looking at the confirmation page")?;
    let outcome = manager.dispatch_close(&mut host, &escape);
    tracing::info!(?outcome, "pressed escape on confirmation");
    anyhow::ensure!(outcome == CloseOutcome::Reopened, "confirmation must stay open");

    click(&mut manager, &mut host, 3, ClickType::Left)?;
    report(&manager, "confirmed purchase");

    click(&mut manager, &mut host, 15, ClickType::Left)?;
    report(&manager, "exited");

    manager.remove(&mut host, PLAYER);
    tracing::info!(
        purchases = purchases.get(),
        host_calls = host.calls().len(),
        "Demo finished"
    );
    Ok(())
}

struct Menu {
    home: Page,
}

fn build_menu(config: &GuiConfig, purchases: &Rc<Cell<u32>>) -> Result<Menu> {
    let home = Page::from_config(config);
    let shop = Page::with_rows("Shop", 3)?;
    let confirm = Page::with_rows("Confirm purchase", 1)?;
    confirm.prevent_close(true);

    // ----- home -----
    let mut open_shop = Item::named("Shop", "EMERALD".parse()?);
    open_shop.add_lore_lines(["Spend your emeralds"]);
    let target = shop.clone();
    open_shop.on_click(move |click| click.open(&target));
    home.set_item(open_shop, 11)?;

    let mut exit = Item::named("Exit", "BARRIER".parse()?);
    exit.on_click(|click| click.close());
    home.set_item(exit, 15)?;

    // ----- shop -----
    let mut sword = Item::named("Diamond Sword", "DIAMOND_SWORD".parse()?);
    sword.add_lore_lines(["Costs 12 emeralds"]);
    sword.add_glow();
    sword.add_flag(ItemFlags::HIDE_ATTRIBUTES);
    let target = confirm.clone();
    sword.on_click(move |click| {
        tracing::info!(click = %click.kind(), "Sword selected");
        click.open(&target);
    });
    shop.set_item(sword, 13)?;

    let mut back = Item::named("Back", "ARROW".parse()?);
    back.on_click(|click| click.open_from_history(1));
    shop.set_item(back, 18)?;

    // ----- confirm -----
    let mut yes = Item::named("Buy", "LIME_STAINED_GLASS_PANE".parse()?);
    let counter = Rc::clone(purchases);
    yes.on_click(move |click| {
        counter.set(counter.get() + 1);
        click.open_from_history(1);
    });
    confirm.set_item(yes, 3)?;

    let mut no = Item::named("Cancel", "RED_STAINED_GLASS_PANE".parse()?);
    no.on_click(|click| click.open_from_history(2));
    confirm.set_item(no, 5)?;

    confirm.on_open(|player| tracing::info!(%player, "Confirmation shown"));
    confirm.on_close(|player| tracing::info!(%player, "Confirmation dismissed"));

    Ok(Menu { home })
}

fn click(
    manager: &mut GuiManager,
    host: &mut MemoryHost,
    slot: usize,
    kind: ClickType,
) -> Result<ClickOutcome> {
    let mut event = host
        .click(PLAYER, slot, kind)
        .context("player has no window open")?;
    let outcome = manager.dispatch_click(host, &mut event)?;
    tracing::debug!(slot, ?outcome, cancelled = event.is_cancelled(), "Click handled");
    Ok(outcome)
}

fn report(manager: &GuiManager, step: &str) {
    let Some(gui) = manager.get(PLAYER) else {
        return;
    };
    let title = gui.current_page().map(Page::title);
    tracing::info!(
        step,
        page = title.as_deref().unwrap_or("<closed>"),
        depth = gui.history().len(),
        "Menu state"
    );
}
