use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use carousel::{Carousel, CarouselConfig, FrameClock, Scene, Scheduler};

const DELAY: Duration = Duration::from_millis(5000);

fn page(slides: usize, dots: usize) -> Scene {
    let mut scene = Scene::new();
    scene.push(["header"]);
    scene.push_many("carousel-slide", slides);
    scene.push_many("dot", dots);
    scene
}

fn active(c: &Carousel<Scene, FrameClock>, class: &str) -> Vec<usize> {
    c.tree().marked(class, "active")
}

#[test]
fn three_slides_cycle_both_ways() {
    let config = CarouselConfig::default().with_delay(DELAY);
    let mut c = Carousel::new(config, page(3, 3), FrameClock::new());

    c.on_ready();
    assert_eq!(active(&c, "carousel-slide"), vec![0]);

    c.next_slide();
    c.next_slide();
    assert_eq!(active(&c, "carousel-slide"), vec![2]);
    assert_eq!(active(&c, "dot"), vec![2]);

    c.next_slide();
    assert_eq!(active(&c, "carousel-slide"), vec![0]);

    c.previous_slide();
    assert_eq!(active(&c, "carousel-slide"), vec![2]);
    assert_eq!(active(&c, "dot"), vec![2]);
}

#[test]
fn two_slides_without_dots() {
    let mut c = Carousel::new(CarouselConfig::default(), page(2, 0), FrameClock::new());
    c.show_slide(0);
    assert_eq!(active(&c, "carousel-slide"), vec![0]);
    assert!(active(&c, "dot").is_empty());
}

#[test]
fn page_without_carousel_stays_idle() {
    let mut c = Carousel::new(CarouselConfig::default(), page(0, 0), FrameClock::new());
    c.on_ready();
    c.advance(DELAY * 10);
    c.next_slide();
    c.go_to_slide(3);
    assert_eq!(c.current_index(), 0);
    assert!(!c.is_auto_sliding());
    assert!(c.tree().marked("header", "active").is_empty());
}

#[test]
fn manual_navigation_gets_a_full_interval() {
    let mut c = Carousel::new(CarouselConfig::default(), page(4, 4), FrameClock::new());
    c.on_ready();

    c.advance(Duration::from_millis(4900));
    c.go_to_slide(3);
    c.advance(Duration::from_millis(4900));
    assert_eq!(active(&c, "carousel-slide"), vec![3]);

    c.advance(Duration::from_millis(100));
    assert_eq!(active(&c, "carousel-slide"), vec![0]);
    assert_eq!(active(&c, "dot"), vec![0]);
}

#[test]
fn custom_selectors_drive_lookup() {
    let mut scene = Scene::new();
    scene.push_many("hero", 2);
    scene.push_many("pip", 2);
    scene.push_many("carousel-slide", 5);

    let config = CarouselConfig::default()
        .with_slide_selector(".hero")
        .with_dot_selector(".pip");
    let mut c = Carousel::new(config, scene, FrameClock::new());
    c.on_ready();
    c.previous_slide();

    assert_eq!(c.tree().marked("hero", "active"), vec![1]);
    assert_eq!(c.tree().marked("pip", "active"), vec![1]);
    assert!(c.tree().marked("carousel-slide", "active").is_empty());
}

/// Counts live timers so teardown is observable after the carousel is gone.
#[derive(Default)]
struct CountingScheduler {
    live: Rc<Cell<usize>>,
}

impl Scheduler for CountingScheduler {
    type Handle = ();

    fn start_repeating(&mut self, _period: Duration) {
        self.live.set(self.live.get() + 1);
    }

    fn cancel(&mut self, _handle: ()) {
        self.live.set(self.live.get() - 1);
    }
}

#[test]
fn dropping_the_carousel_cancels_its_timer() {
    let scheduler = CountingScheduler::default();
    let live = Rc::clone(&scheduler.live);

    let mut c = Carousel::new(CarouselConfig::default(), page(2, 2), scheduler);
    c.on_ready();
    c.go_to_slide(1);
    assert_eq!(live.get(), 1);

    drop(c);
    assert_eq!(live.get(), 0);
}
