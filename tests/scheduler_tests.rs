// Host-side tests for the frame loop, cancellation and event fan-out.

mod common;

use backdrop_core::constants::PARTICLE_COUNT;
use backdrop_core::orbs::spawn_orbs;
use backdrop_core::{
    attach, FrameLoop, LoopControl, OrbLayer, ParticleField, Theme, ThemeSource, Tracker, Viewport,
};
use common::{Op, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

type ParticleLoop = FrameLoop<ParticleField<StdRng>, RecordingSurface>;
type OrbLoop = FrameLoop<OrbLayer, RecordingSurface>;

fn make_loops(theme: &ThemeSource, tracker: &Tracker) -> (Rc<RefCell<ParticleLoop>>, Rc<RefCell<OrbLoop>>) {
    let v = tracker.viewport();
    let field = ParticleField::new(tracker.clone(), theme.clone(), StdRng::seed_from_u64(21));
    let orbs = OrbLayer::new(v, theme.clone());
    (
        Rc::new(RefCell::new(FrameLoop::new(
            field,
            RecordingSurface::new(v.width, v.height),
        ))),
        Rc::new(RefCell::new(FrameLoop::new(
            orbs,
            RecordingSurface::new(v.width, v.height),
        ))),
    )
}

#[test]
fn tick_clears_before_drawing() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, orbs) = make_loops(&theme, &tracker);

    assert_eq!(particles.borrow_mut().tick(), LoopControl::Continue);
    assert_eq!(orbs.borrow_mut().tick(), LoopControl::Continue);
    assert_eq!(particles.borrow().surface().ops[0], Op::Clear);
    assert_eq!(orbs.borrow().surface().ops[0], Op::Clear);
    assert_eq!(particles.borrow().stats().frames(), 1);
}

#[test]
fn cancelled_loop_stops_without_drawing() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, _) = make_loops(&theme, &tracker);

    particles.borrow().token().cancel();
    assert_eq!(particles.borrow_mut().tick(), LoopControl::Stop);
    assert!(particles.borrow().surface().ops.is_empty());
    assert_eq!(particles.borrow().stats().frames(), 0);
}

#[test]
fn theme_change_fans_out_to_both_layers() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, orbs) = make_loops(&theme, &tracker);
    let _h1 = attach(&particles, &theme, &tracker);
    let _h2 = attach(&orbs, &theme, &tracker);

    for _ in 0..10 {
        particles.borrow_mut().tick();
        orbs.borrow_mut().tick();
    }
    let positions_before: Vec<_> = particles
        .borrow()
        .layer()
        .particles()
        .iter()
        .map(|p| p.position)
        .collect();

    theme.set(Theme::Dark);

    let pl = particles.borrow();
    for (p, before) in pl.layer().particles().iter().zip(&positions_before) {
        assert!(Theme::Dark.particle_palette().contains(&p.color));
        assert_eq!(p.position, *before);
    }
    let ol = orbs.borrow();
    for (i, o) in ol.layer().orbs().iter().enumerate() {
        assert_eq!(o.color, Theme::Dark.orb_palette()[i]);
    }
}

#[test]
fn resize_resizes_surface_and_replaces_entities() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, orbs) = make_loops(&theme, &tracker);
    let _h1 = attach(&particles, &theme, &tracker);
    let _h2 = attach(&orbs, &theme, &tracker);

    tracker.set_viewport(300.0, 200.0);

    let pl = particles.borrow();
    assert_eq!(pl.surface().viewport, Viewport::new(300.0, 200.0));
    assert_eq!(pl.layer().viewport(), Viewport::new(300.0, 200.0));
    assert_eq!(pl.layer().particles().len(), PARTICLE_COUNT);
    for p in pl.layer().particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 300.0);
        assert!(p.position.y >= 0.0 && p.position.y < 200.0);
    }
    let ol = orbs.borrow();
    assert_eq!(ol.surface().viewport, Viewport::new(300.0, 200.0));
    assert_eq!(
        ol.layer().orbs(),
        spawn_orbs(Viewport::new(300.0, 200.0), Theme::Light).as_slice()
    );
}

#[test]
fn rapid_resizes_leave_a_single_complete_set() {
    let theme = ThemeSource::new(Theme::Dark);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, _) = make_loops(&theme, &tracker);
    let _h = attach(&particles, &theme, &tracker);

    for i in 0..100 {
        tracker.set_viewport(400.0 + i as f32, 300.0 + i as f32);
    }
    tracker.set_viewport(0.0, 0.0);
    let pl = particles.borrow();
    assert_eq!(pl.layer().particles().len(), PARTICLE_COUNT);
    assert_eq!(pl.layer().viewport(), Viewport::new(1.0, 1.0));
    assert!(pl.layer().particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn dropping_the_handle_cancels_and_detaches() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (_, orbs) = make_loops(&theme, &tracker);

    let handle = attach(&orbs, &theme, &tracker);
    let token = handle.token();
    assert_eq!(theme.subscriber_count(), 1);
    drop(handle);

    assert!(token.is_cancelled());
    assert_eq!(theme.subscriber_count(), 0);
    theme.set(Theme::Dark);
    assert_eq!(
        orbs.borrow().layer().orbs()[0].color,
        Theme::Light.orb_palette()[0]
    );
    assert_eq!(orbs.borrow_mut().tick(), LoopControl::Stop);
}

#[test]
fn explicit_cancel_is_idempotent() {
    let theme = ThemeSource::new(Theme::Light);
    let tracker = Tracker::new(Viewport::new(800.0, 600.0));
    let (particles, _) = make_loops(&theme, &tracker);
    let mut handle = attach(&particles, &theme, &tracker);
    handle.cancel();
    handle.cancel();
    assert!(handle.is_cancelled());
    tracker.set_viewport(100.0, 100.0);
    assert_eq!(
        particles.borrow().layer().viewport(),
        Viewport::new(800.0, 600.0)
    );
}
