//! Holo Range entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use holo_range::audio::{AudioManager, SoundEffect};
    use holo_range::input::client_to_surface;
    use holo_range::platform::{FrameRequests, run_frame};
    use holo_range::renderer::CanvasRenderer;
    use holo_range::sim::{GameEvent, Hud, Playfield};
    use holo_range::{Game, PanelCatalog, Settings};

    /// DOM overlay and HUD elements
    struct Overlays {
        modal: Option<Element>,
        ending: Option<Element>,
        panel_title: Option<Element>,
        panel_tag: Option<Element>,
        panel_body: Option<Element>,
        hp: Option<Element>,
        score: Option<Element>,
        targets_left: Option<Element>,
    }

    impl Overlays {
        fn find(document: &Document) -> Self {
            let get = |id: &str| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::warn!("Missing element #{}", id);
                }
                el
            };
            Self {
                modal: get("modal"),
                ending: get("ending"),
                panel_title: get("panelTitle"),
                panel_tag: get("panelTag"),
                panel_body: get("panelBody"),
                hp: get("hp"),
                score: get("score"),
                targets_left: get("targetsLeft"),
            }
        }

        fn set_hidden(el: &Option<Element>, hidden: bool) {
            if let Some(el) = el {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }

        fn set_text(el: &Option<Element>, text: &str) {
            if let Some(el) = el {
                el.set_text_content(Some(text));
            }
        }

        fn update_hud(&self, hud: &Hud) {
            Self::set_text(&self.hp, &hud.hp.to_string());
            Self::set_text(&self.score, &hud.score.to_string());
            Self::set_text(&self.targets_left, &hud.targets_left.to_string());
        }
    }

    /// Browser host holding the game and everything it talks to
    struct Host {
        game: Game,
        renderer: CanvasRenderer,
        audio: AudioManager,
        scheduler: FrameRequests,
        overlays: Overlays,
        canvas: HtmlCanvasElement,
        last_hud: Option<Hud>,
    }

    impl Host {
        /// Apply pending game events: audio cues and overlay visibility
        fn sync(&mut self) {
            for event in self.game.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                match event {
                    GameEvent::PanelOpened { .. } => self.show_panel(),
                    GameEvent::PanelClosed => Overlays::set_hidden(&self.overlays.modal, true),
                    GameEvent::EndingOpened => Overlays::set_hidden(&self.overlays.ending, false),
                    GameEvent::EndingClosed => Overlays::set_hidden(&self.overlays.ending, true),
                    GameEvent::Restarted => {
                        Overlays::set_hidden(&self.overlays.modal, true);
                        Overlays::set_hidden(&self.overlays.ending, true);
                    }
                    GameEvent::ShotFired | GameEvent::TargetDestroyed { .. } => {}
                }
            }

            let hud = self.game.state.hud;
            if self.last_hud != Some(hud) {
                self.overlays.update_hud(&hud);
                self.last_hud = Some(hud);
            }
        }

        fn show_panel(&self) {
            let Some(panel) = self.game.open_panel() else {
                return;
            };
            Overlays::set_text(&self.overlays.panel_title, &panel.title);
            Overlays::set_text(&self.overlays.panel_tag, &panel.tag);
            if let Some(body) = &self.overlays.panel_body {
                body.set_inner_html(&panel.body_html);
            }
            Overlays::set_hidden(&self.overlays.modal, false);
        }

        fn toggle_mute(&mut self) {
            let settings = &mut self.game.settings;
            settings.muted = !settings.muted;
            settings.save();
            self.audio.apply_settings(settings);
            log::info!("Muted: {}", settings.muted);
        }

        /// Map a mouse event into surface coordinates
        fn pointer_pos(&self, event: &MouseEvent) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            client_to_surface(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32),
            )
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Holo Range starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The canvas' configured size is the logical surface
        let playfield = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(playfield, seed, PanelCatalog::builtin(), settings.clone()),
            renderer: CanvasRenderer::new(ctx),
            audio: AudioManager::new(&settings),
            scheduler: FrameRequests::new(),
            overlays: Overlays::find(&document),
            canvas: canvas.clone(),
            last_hud: None,
        }));
        host.borrow_mut().sync();

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(host.clone());
        setup_pointer(&canvas, host.clone());
        setup_overlay_buttons(&document, host.clone());

        // Start frame loop
        request_animation_frame(host);

        log::info!("Holo Range running!");
    }

    fn setup_keyboard(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut h = host.borrow_mut();
                if event.key().eq_ignore_ascii_case("m") {
                    h.toggle_mute();
                }
                h.game.key_down(&event.key());
                h.sync();
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.key_up(&event.key());
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (alt-tab) would otherwise leave keys stuck down
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                host.borrow_mut().game.blur();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut h = host.borrow_mut();
                let pos = h.pointer_pos(&event);
                h.game.pointer_moved(pos);
            });
            let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for (name, down) in [("mousedown", true), ("mouseup", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                host.borrow_mut().game.pointer_button(down);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut h = host.borrow_mut();
                h.game.click();
                h.sync();
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_overlay_buttons(document: &Document, host: Rc<RefCell<Host>>) {
        let buttons: [(&str, fn(&mut Game)); 5] = [
            ("closeBtn", Game::close_panel),
            ("modalBackdrop", Game::close_panel),
            ("nextBtn", Game::close_panel),
            ("endClose", Game::close_ending),
            ("restartBtn", Game::restart),
        ];

        for (id, action) in buttons {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut h = host.borrow_mut();
                action(&mut h.game);
                h.sync();
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(host: Rc<RefCell<Host>>, time: f64) {
        let again = {
            let mut guard = host.borrow_mut();
            let h = &mut *guard;
            let frame = run_frame(&mut h.game, &mut h.scheduler, js_sys::Date::now());
            h.renderer.present(&frame);
            h.sync();
            log::trace!("frame at {:.1}ms, {} commands", time, frame.len());
            h.scheduler.take()
        };

        if again {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless session: fires at every billboard and logs what happens
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use holo_range::platform::{FrameRequests, run_frame};
    use holo_range::sim::{GameEvent, Mode, Playfield};
    use holo_range::{Game, PanelCatalog, Settings};

    env_logger::init();
    log::info!("Holo Range (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let mut game = Game::new(Playfield::default(), 2024, PanelCatalog::builtin(), Settings::load());
    let mut scheduler = FrameRequests::with_budget(2000);
    let ids: Vec<String> = game.state.targets.iter().map(|t| t.id.clone()).collect();
    let mut next = 0;
    let mut now = 0.0;

    loop {
        match game.mode().clone() {
            Mode::PanelOpen { id } => {
                if let Some(panel) = game.open_panel() {
                    println!("[panel] {} | {}", panel.title, panel.tag);
                }
                log::debug!("closing panel {}", id);
                game.close_panel();
            }
            Mode::Ending => {
                println!("[ending] all billboards cleared");
                break;
            }
            Mode::Playing if game.state.bullets.is_empty() && next < ids.len() => {
                // Step up close to the billboard and fire
                if let Some(aim) = game.state.target(&ids[next]).map(|t| t.rect.center()) {
                    game.state.player.pos = game.state.playfield.clamp_player(aim - Vec2::new(160.0, 0.0));
                    game.pointer_moved(aim);
                    game.click();
                }
                next += 1;
            }
            Mode::Playing => {}
        }

        run_frame(&mut game, &mut scheduler, now);
        now += 1000.0 / 60.0;

        for event in game.drain_events() {
            if let GameEvent::TargetDestroyed { id, at } = event {
                println!("[hit] {} at ({:.0}, {:.0})", id, at.x, at.y);
            }
        }

        if !scheduler.take() {
            log::warn!("Frame budget exhausted");
            break;
        }
    }

    let hud = game.state.hud;
    println!(
        "seed {} | score {} | hp {} | targets left {} | steps {} | frames {}",
        game.state.seed,
        hud.score,
        hud.hp,
        hud.targets_left,
        game.state.time_ticks,
        scheduler.granted()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
