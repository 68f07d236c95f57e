use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::sample_grid::sample_grid_parallel_rayon::sample_grid_parallel_rayon_cancelable;
use crate::core::data::canvas::Canvas;
use crate::core::fractals::julia::colour_mapping::hue_cycle::JuliaHueCycle;
use crate::core::fractals::julia::errors::invalid_selection::InvalidSelectionError;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

// A canvas is only worth presenting if no newer selection was submitted while it was
// painted; every later submission already owns a walk that will replace it.
struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    config: JuliaConfig,
    canvas_size: (u32, u32),
    presenter_port: Arc<dyn RenderPresenterPort>,
}

/// Fires when the controller shuts down or a newer request bumps the generation counter.
struct SupersededBy<'a> {
    shared: &'a SharedState,
    generation: u64,
}

impl CancelToken for SupersededBy<'_> {
    fn is_cancelled(&self) -> bool {
        self.shared.shutdown.load(Ordering::Relaxed)
            || self.generation != self.shared.generation.load(Ordering::Relaxed)
    }
}

pub struct RenderController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderController {
    pub fn new(
        config: JuliaConfig,
        canvas_size: (u32, u32),
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            config,
            canvas_size,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a render of catalog entry `index`, superseding any walk in progress.
    ///
    /// The index is checked here, before a walk can start.
    pub fn submit_request(&self, index: usize) -> Result<u64, InvalidSelectionError> {
        let request = RenderRequest::select(index)?;
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            "queued render {} of function {}: f(z) = {}",
            generation, request.index, request.function
        );

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        Ok(generation)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = SupersededBy {
                shared,
                generation: job_generation,
            };

            let start = Instant::now();
            let result = Self::render_request(shared, &request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(canvas) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    info!(
                        "function {}: f(z) = {} took {:.3}s",
                        request.index,
                        request.function,
                        render_duration.as_secs_f64()
                    );

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        function: request.function,
                        canvas,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderOutcome::Cancelled) => {
                    debug!("render {} cancelled", job_generation);
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    warn!("render {} failed: {}", job_generation, message);

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render_request<C: CancelToken>(
        shared: &SharedState,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<Canvas, RenderOutcome> {
        let config = &shared.config;
        let algorithm = config
            .build_algorithm(request.function)
            .map_err(|err| RenderOutcome::Error(err.to_string()))?;
        let (width, height) = shared.canvas_size;
        let mut canvas =
            Canvas::new(width, height).map_err(|err| RenderOutcome::Error(err.to_string()))?;

        sample_grid_parallel_rayon_cancelable(
            &config.grid,
            &algorithm,
            &JuliaHueCycle,
            &config.screen,
            &mut canvas,
            cancel,
        )
        .map_err(|_| RenderOutcome::Cancelled)?;

        Ok(canvas)
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for RenderController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Hsl;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::sample_grid::SampleGrid;
    use std::time::Duration;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl RenderPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(port: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = port.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn small_config() -> JuliaConfig {
        JuliaConfig {
            grid: SampleGrid::new(Complex::new(-1.2, -1.2), Complex::new(1.2, 1.2), 0.05)
                .unwrap(),
            ..JuliaConfig::default()
        }
    }

    fn create_controller(config: JuliaConfig) -> (Arc<MockPresenterPort>, RenderController) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = RenderController::new(
            config,
            (600, 600),
            Arc::clone(&presenter_port) as Arc<dyn RenderPresenterPort>,
        );

        (presenter_port, controller)
    }

    fn extract_generation(events: &[RenderEvent]) -> u64 {
        events
            .iter()
            .find_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(err) => Some(err.generation),
            })
            .expect("should have at least one event with generation")
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let (presenter_port, mut controller) = create_controller(small_config());

        let generation = controller.submit_request(0).unwrap();
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(5));
        assert!(!events.is_empty(), "expected a render event");

        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert_eq!(frame.function.to_string(), "z^2 + 0.279");
                    assert_eq!(frame.canvas.width(), 600);
                    // origin escapes after 17 iterations: hue 170
                    let expected = Hsl::new(170.0, 100.0, 50.0).to_rgb();
                    assert_eq!(frame.canvas.pixel(Point { x: 300, y: 300 }), Some(expected));
                    saw_frame = true;
                }
                RenderEvent::Error(error) => {
                    panic!("unexpected render error: {}", error.message);
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn test_invalid_index_is_rejected_before_rendering() {
        let (presenter_port, mut controller) = create_controller(small_config());

        let result = controller.submit_request(5);

        assert_eq!(result, Err(InvalidSelectionError { index: 5, len: 5 }));
        thread::sleep(Duration::from_millis(50));
        assert!(presenter_port.take_events().is_empty());
        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut controller) = create_controller(small_config());

        controller.submit_request(1).unwrap();
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(5));
        assert!(!events_a.is_empty(), "expected events from request A");
        let gen_a = extract_generation(&events_a);

        controller.submit_request(2).unwrap();
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(5));
        assert!(!events_b.is_empty(), "expected events from request B");
        let gen_b = extract_generation(&events_b);

        assert!(gen_b > gen_a, "generation B ({}) should exceed A ({})", gen_b, gen_a);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_submissions_present_only_latest() {
        let (presenter_port, mut controller) = create_controller(small_config());

        controller.submit_request(0).unwrap();
        controller.submit_request(1).unwrap();
        let latest = controller.submit_request(3).unwrap();

        let start = Instant::now();
        while controller.last_completed_generation() != latest {
            assert!(
                start.elapsed() < Duration::from_secs(10),
                "latest render did not complete"
            );
            thread::sleep(Duration::from_millis(10));
        }

        let events = presenter_port.take_events();
        let last = events.last().expect("expected at least one frame");
        match last {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, latest);
                assert_eq!(frame.function.to_string(), "z^2 + 0.279 + 0.467i");
            }
            RenderEvent::Error(error) => panic!("unexpected render error: {}", error.message),
        }

        for event in &events {
            if let RenderEvent::Frame(frame) = event {
                assert!(frame.generation <= latest);
            }
        }

        controller.shutdown();
    }

    #[test]
    fn test_invalid_config_emits_error_event() {
        let config = JuliaConfig {
            max_iterations: 0,
            ..small_config()
        };
        let (presenter_port, mut controller) = create_controller(config);

        let generation = controller.submit_request(0).unwrap();
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(5));

        match events.first() {
            Some(RenderEvent::Error(error)) => {
                assert_eq!(error.generation, generation);
                assert_eq!(error.message, "Maximum iterations must be greater than zero");
            }
            other => panic!("expected an error event, got {:?}", other),
        }

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (_presenter_port, mut controller) = create_controller(small_config());

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_walk_token_fires_on_newer_generation_or_shutdown() {
        let shared = SharedState {
            generation: AtomicU64::new(4),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            config: small_config(),
            canvas_size: (10, 10),
            presenter_port: Arc::new(MockPresenterPort::default()),
        };
        let token = SupersededBy {
            shared: &shared,
            generation: 4,
        };

        assert!(!token.is_cancelled());

        shared.generation.store(5, Ordering::SeqCst);
        assert!(token.is_cancelled());

        shared.generation.store(4, Ordering::SeqCst);
        shared.shutdown.store(true, Ordering::SeqCst);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (_presenter_port, mut controller) = create_controller(small_config());

        controller.shutdown();
        controller.shutdown();
    }
}
