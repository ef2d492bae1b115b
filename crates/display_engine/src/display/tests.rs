//! Behavior tests for composed display objects

use std::sync::Arc;

use approx::assert_relative_eq;

use super::*;
use crate::capabilities::{
    core, destroy, in_world, install, life_span, reset, CapabilityCatalog, CapabilityModule,
    CompositionError, DisplayType,
};
use crate::config::GameConfig;
use crate::foundation::math::Rect;
use crate::game::Game;
use crate::textures::{Texture, TextureCache};

fn game() -> Arc<Game> {
    crate::foundation::logging::init_for_tests();
    let mut textures = TextureCache::new();
    textures.add_image("logo", 64, 32);
    textures.add_sprite_sheet("tiles", 64, 64, 32, 32);
    Game::with_textures(GameConfig::default(), textures).unwrap()
}

fn attached(game: &Arc<Game>, x: f32, y: f32) -> Image {
    let mut image = Image::new(game, Some(x), Some(y), "logo", None::<usize>).unwrap();
    image.in_world = true;
    image
}

/// Sprite kind with InWorld in front of Core, set to die when it leaves
/// the world
fn bounded_kind() -> Arc<DisplayType> {
    let chain = UpdateChain::<DisplayObject>::new()
        .then(in_world::STAGE, in_world::pre_update)
        .then(core::STAGE, core::pre_update);
    let kind = install(ObjectType::Sprite, &CapabilityCatalog::standard(), &["InWorld", "LifeSpan"])
        .unwrap()
        .with_update_chain(chain);
    Arc::new(kind)
}

#[test]
fn test_image_installs_every_capability() {
    let game = game();
    let kind = game.image_type();
    assert_eq!(kind.object_type(), ObjectType::Image);
    assert_eq!(kind.capabilities(), &IMAGE_CAPABILITIES[..]);
    assert_eq!(
        kind.update_chain().stage_names(),
        vec![in_world::STAGE, core::STAGE]
    );
}

#[test]
fn test_last_module_wins() {
    fn tag_a(_: &DisplayObject) -> Value {
        Value::Number(1.0)
    }
    fn tag_b(_: &DisplayObject) -> Value {
        Value::Number(2.0)
    }

    let mut catalog = CapabilityCatalog::standard();
    catalog.register(CapabilityModule::new("TagA").getter("tag", tag_a));
    catalog.register(CapabilityModule::new("TagB").getter("tag", tag_b));
    let game = game();

    let forward = Arc::new(install(ObjectType::Sprite, &catalog, &["TagA", "TagB"]).unwrap());
    let object = DisplayObject::new(&forward, &game, None, None, "logo", None::<usize>).unwrap();
    assert_eq!(object.get("tag"), Ok(Value::Number(2.0)));
    assert_eq!(object.member_origin("tag"), Some("TagB"));

    let reversed = Arc::new(install(ObjectType::Sprite, &catalog, &["TagB", "TagA"]).unwrap());
    let object = DisplayObject::new(&reversed, &game, None, None, "logo", None::<usize>).unwrap();
    assert_eq!(object.get("tag"), Ok(Value::Number(1.0)));
    assert_eq!(object.member_origin("tag"), Some("TagA"));
}

#[test]
fn test_unknown_capability_fails_assembly() {
    let result = install(ObjectType::Image, &CapabilityCatalog::standard(), &["Angle", "Wobble"]);
    assert_eq!(
        result.unwrap_err(),
        CompositionError::UnknownCapability("Wobble".into())
    );
}

#[test]
fn test_invalid_frame_falls_back_to_default() {
    let game = game();
    let by_name = Image::new(&game, None, None, "tiles", "no-such-frame").unwrap();
    let by_index = Image::new(&game, None, None, "tiles", 99usize).unwrap();
    let expected = game.textures().get("tiles").unwrap().default_frame().clone();

    assert_eq!(by_name.frame(), &expected);
    assert_eq!(by_index.frame(), &expected);
    assert_eq!(by_name.sprite().source_rect(), expected.rect);
}

#[test]
fn test_named_frame_resolves() {
    let game = game();
    let image = Image::new(&game, None, None, "tiles", "3").unwrap();
    assert_eq!(image.frame().index, 3);
    assert_eq!(image.frame().rect, Rect::new(32.0, 32.0, 32.0, 32.0));
}

#[test]
fn test_missing_texture_is_an_error() {
    let game = game();
    let result = Image::new(&game, Some(1.0), Some(2.0), "nope", None::<usize>);
    assert_eq!(result.unwrap_err(), DisplayError::ResourceNotFound("nope".into()));
}

#[test]
fn test_texture_reference_source() {
    let game = game();
    let texture = Arc::new(Texture::single("loose", 10, 10));
    let image = Image::at_origin(&game, Arc::clone(&texture)).unwrap();
    assert_eq!(image.texture().key(), "loose");
}

#[test]
fn test_position_defaults_to_origin() {
    let game = game();
    let image = Image::at_origin(&game, "logo").unwrap();
    assert_relative_eq!(image.position().x, 0.0);
    assert_relative_eq!(image.position().y, 0.0);

    let image = Image::new(&game, Some(5.0), None, "logo", None::<usize>).unwrap();
    assert_relative_eq!(image.position().x, 5.0);
    assert_relative_eq!(image.position().y, 0.0);
}

#[test]
fn test_construction_leaves_primitive_defaults() {
    let game = game();
    let image = Image::at_origin(&game, "logo").unwrap();
    let sprite = image.sprite();
    assert_relative_eq!(sprite.scale.x, 1.0);
    assert_relative_eq!(sprite.alpha, 1.0);
    assert_relative_eq!(sprite.rotation, 0.0);
    assert!(sprite.visible);
    assert!(image.fields().flag(core::EXISTS));
    assert!(image.fields().flag(core::ALIVE));
    assert!(image.fields().flag(core::FRESH));
}

#[test]
fn test_in_world_halt_skips_core() {
    let game = game();
    let mut object = DisplayObject::new(&bounded_kind(), &game, Some(5000.0), Some(5000.0), "logo", None::<usize>).unwrap();
    object.in_world = true;
    object.set(in_world::CHECK_WORLD_BOUNDS, true).unwrap();
    object.set(in_world::OUT_OF_BOUNDS_KILL, true).unwrap();

    assert!(!object.pre_update());
    assert_eq!(object.core_checks(), 0);
}

#[test]
fn test_pre_update_requires_both_stages() {
    let game = game();
    let mut image = attached(&game, 10.0, 10.0);
    assert!(image.pre_update());
    assert!(image.pre_update());
    assert_eq!(image.core_checks(), 2);
    assert_eq!(image.pre_update_outcome(), UpdateOutcome::Ready);

    image.set(core::EXISTS, false).unwrap();
    assert!(!image.pre_update());
    assert_eq!(image.pre_update_outcome(), UpdateOutcome::CoreChecked);
    assert_eq!(image.core_checks(), 5);
}

#[test]
fn test_detached_image_fails_core() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    assert!(!image.pre_update());
    assert_eq!(image.core_checks(), 1);
}

#[test]
fn test_destroyed_image_never_updates() {
    let game = game();
    let mut image = attached(&game, 0.0, 0.0);
    image.set_input_enabled(true).unwrap();

    assert_eq!(image.destroy(), Ok(true));
    assert!(image.is_destroyed());
    assert!(image.game().is_none());
    assert!(image.input().is_none());
    assert!(!image.sprite().visible);

    for _ in 0..3 {
        assert!(!image.pre_update());
    }
    assert_eq!(image.core_checks(), 0);
    assert_eq!(image.pre_update_outcome(), UpdateOutcome::Skipped);

    assert_eq!(image.destroy(), Ok(false));
    let events = image.drain_events();
    assert_eq!(
        events.iter().filter(|&&event| event == DisplayEvent::Destroyed).count(),
        1
    );
}

#[test]
fn test_core_overrides_are_attributed() {
    let game = game();
    let image = Image::at_origin(&game, "logo").unwrap();
    assert_eq!(image.member_origin(core::POST_UPDATE), Some("FixedToCamera"));
    assert_eq!(image.member_origin(core::ALIVE), Some("LifeSpan"));
    assert_eq!(image.member_origin(core::EXISTS), Some("Core"));
    assert_eq!(image.member_origin(core::PRE_UPDATE), Some("Image"));

    let replaced: Vec<&str> = image
        .kind()
        .surface()
        .overrides()
        .iter()
        .filter(|record| record.replaced == "Core")
        .map(|record| record.key)
        .collect();
    assert!(replaced.contains(&core::POST_UPDATE));
    assert!(replaced.contains(&core::ALIVE));
}

#[test]
fn test_pre_update_member_runs_chain() {
    let game = game();
    let mut image = attached(&game, 0.0, 0.0);
    assert_eq!(image.call(core::PRE_UPDATE, &[]), Ok(Value::Bool(true)));
    assert_eq!(image.call(core::STAGE, &[]), Ok(Value::Bool(true)));
    assert_eq!(image.core_checks(), 2);
}

#[test]
fn test_angle_wraps() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    image.set_angle(270.0).unwrap();
    assert_relative_eq!(image.angle().unwrap(), -90.0, epsilon = 1e-4);
    assert_relative_eq!(image.sprite().rotation, -std::f32::consts::FRAC_PI_2, epsilon = 1e-5);
}

#[test]
fn test_crop_clips_to_frame() {
    let game = game();
    let mut image = Image::new(&game, None, None, "tiles", 3usize).unwrap();

    image.crop(Some(Rect::new(8.0, 8.0, 100.0, 4.0))).unwrap();
    assert_eq!(image.sprite().source_rect(), Rect::new(40.0, 40.0, 24.0, 4.0));

    image.set_frame(0usize);
    assert_eq!(image.sprite().source_rect(), Rect::new(8.0, 8.0, 24.0, 4.0));

    image.crop(None).unwrap();
    assert_eq!(image.sprite().source_rect(), Rect::new(0.0, 0.0, 32.0, 32.0));
    assert_eq!(
        image.call(crate::capabilities::crop::CROP, &[Value::Bool(true)]),
        Err(CallError::BadArgument { member: "crop".into(), expected: "a rectangle or nothing" })
    );
}

#[test]
fn test_bounds_properties() {
    let game = game();
    let mut image = Image::new(&game, Some(10.0), Some(20.0), "logo", None::<usize>).unwrap();
    assert_eq!(image.get("right"), Ok(Value::Number(74.0)));
    assert_eq!(image.get("bottom"), Ok(Value::Number(52.0)));

    image.set("left", 0.0).unwrap();
    assert_relative_eq!(image.position().x, 0.0);
    assert_eq!(image.set("offsetX", 1.0), Err(CallError::ReadOnly("offsetX".into())));
}

#[test]
fn test_kill_revive_and_reset() {
    let game = game();
    let mut image = attached(&game, 0.0, 0.0);

    image.kill().unwrap();
    assert!(!image.pre_update());
    assert!(!image.sprite().visible);

    image.revive(None).unwrap();
    assert!(image.pre_update());
    assert_eq!(image.fields().number(reset::HEALTH), Some(life_span::DEFAULT_REVIVE_HEALTH));

    image.kill().unwrap();
    image.reset(50.0, 60.0, Some(3.0)).unwrap();
    assert!(image.pre_update());
    assert_relative_eq!(image.position().x, 50.0);
    assert_eq!(image.fields().number(reset::HEALTH), Some(3.0));
    assert_eq!(
        image.drain_events(),
        vec![DisplayEvent::Killed, DisplayEvent::Revived, DisplayEvent::Killed]
    );
}

#[test]
fn test_input_enable_and_disable() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    assert!(image.input().is_none());

    image.set_input_enabled(true).unwrap();
    assert!(image.input().is_some_and(|input| input.enabled));
    image.set_input_enabled(true).unwrap();
    image.set_input_enabled(false).unwrap();
    assert!(image.input().is_some_and(|input| !input.enabled));
    assert_eq!(
        image.drain_events(),
        vec![DisplayEvent::InputEnabled, DisplayEvent::InputDisabled]
    );
}

#[test]
fn test_scale_min_max_clamps() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    image.sprite_mut().scale.x = 5.0;
    image.sprite_mut().scale.y = 0.1;

    image.set_scale_min_max(Some(0.5), Some(2.0)).unwrap();
    assert_relative_eq!(image.sprite().scale.x, 2.0);
    assert_relative_eq!(image.sprite().scale.y, 0.5);

    image.set_scale_min_max(None, None).unwrap();
    image.sprite_mut().scale.x = 9.0;
    image.post_update().unwrap();
    assert_relative_eq!(image.sprite().scale.x, 9.0);
}

#[test]
fn test_smoothed_maps_scale_mode() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    assert_eq!(image.smoothed(), Ok(true));
    image.set_smoothed(false).unwrap();
    assert_eq!(image.sprite().scale_mode, ScaleMode::Nearest);
}

#[test]
fn test_in_camera_and_overlap() {
    let game = game();
    let mut image = Image::new(&game, Some(790.0), Some(590.0), "logo", None::<usize>).unwrap();
    assert_eq!(image.in_camera(), Ok(true));
    assert_eq!(image.overlap(Rect::new(800.0, 600.0, 10.0, 10.0)), Ok(true));
    assert_eq!(image.overlap(Rect::new(0.0, 0.0, 10.0, 10.0)), Ok(false));

    image.set_position(1000.0, 1000.0);
    assert_eq!(image.in_camera(), Ok(false));
}

#[test]
fn test_dynamic_access_errors() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    assert_eq!(image.get("wobble"), Err(CallError::MissingMember("wobble".into())));
    assert_eq!(image.get(destroy::DESTROY), Err(CallError::NotReadable("destroy".into())));
    assert_eq!(image.call(core::EXISTS, &[]), Err(CallError::NotAMethod("exists".into())));
    assert_eq!(image.set(destroy::DESTROY, true), Err(CallError::ReadOnly("destroy".into())));
}

#[test]
fn test_image_lifespan_is_stored_not_counted() {
    let game = game();
    let mut image = Image::at_origin(&game, "logo").unwrap();
    image.set_lifespan(20.0).unwrap();

    let mut world = crate::world::World::new(Arc::clone(&game));
    let id = world.add(image);
    for _ in 0..10 {
        assert_eq!(world.step().unwrap().ready, 1);
    }

    let object = world.get(id).unwrap();
    assert_eq!(object.fields().number(life_span::LIFESPAN), Some(20.0));
    assert!(object.fields().flag(core::ALIVE));
}

#[test]
fn test_field_writes_keep_their_kind() {
    let game = game();
    let mut image = attached(&game, 0.0, 0.0);

    assert_eq!(
        image.set(life_span::LIFESPAN, true),
        Err(CallError::BadArgument { member: "lifespan".into(), expected: "a number" })
    );
    assert_eq!(image.lifespan(), Ok(0.0));

    assert_eq!(
        image.set(core::ALIVE, 1.0),
        Err(CallError::BadArgument { member: "alive".into(), expected: "a flag" })
    );
    assert_eq!(
        image.set(core::EXISTS, Value::Empty),
        Err(CallError::BadArgument { member: "exists".into(), expected: "a flag" })
    );
    assert!(image.fields().flag(core::ALIVE));
    assert!(image.pre_update());

    let crop = crate::capabilities::crop::CROP_RECT;
    image.set(crop, Rect::new(0.0, 0.0, 4.0, 4.0)).unwrap();
    image.set(crop, Value::Empty).unwrap();
    assert!(image.fields().rect(crop).is_none());
}
