use brewguide_core::{Item, ItemRef, PotionKind, RecipeCatalog, StandardNames};
use brewguide_panel::{hit, layout, Hit, PanelContent, ScrollState};
use brewguide_stand::slots::{FUEL_SLOT, INGREDIENT_SLOT, PLAYER_SLOTS_START};
use brewguide_stand::{stage_recipe, StageError, StandSlots};

const PANEL_X: f32 = 100.0;
const PANEL_Y: f32 = 40.0;

#[test]
fn search_scroll_click_and_stage_work_end_to_end() {
    let catalog = RecipeCatalog::vanilla();
    let names = StandardNames;

    // Type a query; the panel narrows to the night-vision recipes.
    let content = PanelContent::build(&catalog, "night", &names);
    assert!(!content.is_empty());

    let mut scroll = ScrollState::new();
    scroll.on_content_changed(layout::total_content_height(&content), layout::VIEWPORT_HEIGHT);

    // Click the row under the first header.
    let pointer_y = PANEL_Y + layout::ROW_HEIGHT + 4.0;
    let recipe = match hit::resolve(&content, &scroll, PANEL_X, PANEL_Y, PANEL_X + 10.0, pointer_y)
    {
        Hit::Recipe(recipe) => recipe,
        other => panic!("expected the first recipe row, got {other:?}"),
    };
    assert_eq!(recipe.result, ItemRef::potion(PotionKind::NightVision));

    // Stage it out of a pocket inventory onto a fueled stand.
    let mut slots = StandSlots::new(PLAYER_SLOTS_START + 9);
    slots.set(PLAYER_SLOTS_START + 2, recipe.base, 1);
    slots.set(PLAYER_SLOTS_START + 5, recipe.catalyst, 3);
    let plan = stage_recipe(&recipe, &slots, true).expect("base and catalyst are in inventory");

    assert!(plan.moves.iter().any(|m| m.to == INGREDIENT_SLOT));
    assert!(plan.moves.iter().all(|m| m.to != FUEL_SLOT));
    assert!(plan.moves.iter().all(|m| m.from >= PLAYER_SLOTS_START));
}

#[test]
fn missing_ingredients_deny_staging_but_never_panic() {
    let catalog = RecipeCatalog::vanilla();
    let recipe = catalog.recipes()[0];

    let slots = StandSlots::new(PLAYER_SLOTS_START + 9);
    match stage_recipe(&recipe, &slots, false) {
        Err(StageError::MissingItems(missing)) => {
            assert!(!missing.has_base);
            assert!(!missing.has_catalyst);
            assert!(!missing.has_fuel);
        }
        Ok(_) => panic!("an empty inventory cannot stage anything"),
    }
}

#[test]
fn filtering_rehomes_the_scroll_before_the_next_hit_test() {
    let catalog = RecipeCatalog::vanilla();
    let names = StandardNames;

    // Scroll deep into the full list.
    let full = PanelContent::build(&catalog, "", &names);
    let mut scroll = ScrollState::new();
    scroll.on_content_changed(layout::total_content_height(&full), layout::VIEWPORT_HEIGHT);
    scroll.on_wheel(10.0);
    assert!(scroll.offset_rows() > 0.0);

    // Typing a query resets to the top; the shrunken content re-derives
    // the limits before the panel paints again.
    scroll.on_filter_changed();
    let filtered = PanelContent::build(&catalog, "wart", &names);
    scroll.on_content_changed(
        layout::total_content_height(&filtered),
        layout::VIEWPORT_HEIGHT,
    );
    assert_eq!(scroll.offset_rows(), 0.0);

    // The nether wart recipe sits right under the Base header again.
    let hit = hit::resolve(
        &filtered,
        &scroll,
        PANEL_X,
        PANEL_Y,
        PANEL_X + 10.0,
        PANEL_Y + layout::ROW_HEIGHT + 4.0,
    );
    match hit {
        Hit::Recipe(recipe) => assert_eq!(recipe.catalyst, ItemRef::of(Item::NetherWart)),
        other => panic!("expected the nether wart recipe, got {other:?}"),
    }
}
