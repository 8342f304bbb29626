use crate::fixture::FeedFixture;
use anyhow::{Context, Result, bail, ensure};
use hut_core::spinner::{TOP_LEVEL, sub_options};
use hut_core::{SpinnerGame, SpinnerMenus, SpinnerView};

pub fn run(fixture: &FeedFixture, seed: u64) -> Result<()> {
    let menus = &fixture.snapshot.spinner;
    let mut game = SpinnerGame::new(menus.clone(), seed);
    ensure!(game.accept().is_none(), "accept on the start screen must do nothing");

    for category in TOP_LEVEL {
        game.reset();
        game.select_category(category);
        let subs = sub_options(category);

        if menus.is_direct(category) {
            check_draw(&mut game, menus, category, None)?;
        } else if menus.get(category).is_none() && subs.is_empty() {
            ensure!(
                matches!(game.view(), SpinnerView::Empty { .. }),
                "`{category}` has nothing to offer but shows {:?}",
                game.view()
            );
        } else {
            ensure!(
                matches!(game.view(), SpinnerView::SubOptions { category: c } if c == category),
                "`{category}` should ask for a sub-option, shows {:?}",
                game.view()
            );
            for sub in subs {
                game.select_category(category);
                game.suggest(category, Some(sub));
                check_draw(&mut game, menus, category, Some(sub))?;
            }
        }
    }
    Ok(())
}

fn check_draw(
    game: &mut SpinnerGame,
    menus: &SpinnerMenus,
    category: &str,
    sub: Option<&str>,
) -> Result<()> {
    let items = menus.items(category, sub);
    match game.view() {
        SpinnerView::Suggestion { .. } => {
            let picked = game
                .selected()
                .context("suggestion shown without a selected item")?;
            ensure!(
                items.contains(picked),
                "{category}/{sub:?} drew `{}` from outside its list",
                picked.en
            );
            ensure!(game.accept().is_some(), "suggestion for {category}/{sub:?} cannot be accepted");
            ensure!(*game.view() == SpinnerView::Accepted, "accepting did not finish the spin");
        }
        SpinnerView::Empty { .. } => {
            ensure!(items.is_empty(), "{category}/{sub:?} has items but shows the empty screen");
        }
        other => bail!("unexpected view {other:?} after drawing from {category}/{sub:?}"),
    }
    Ok(())
}
