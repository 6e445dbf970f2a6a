//! Recording fakes for the actor and display collaborators.

use async_trait::async_trait;
use showrunner_core::{ActorState, Position};
use showrunner_error::{PlaybackError, PlaybackErrorKind, ShowrunnerResult};
use showrunner_interface::{
    Actor, ActorRegistry, Animator, ClipCompletion, ClipPlayer, Movement, StatusDisplay, Target,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// One observed command.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Event {
    Title(String),
    Caption(String),
    LookAt(String, Position),
    MoveTo(String, Position),
    Apply(String, ActorState),
    Play(String, PathBuf),
}

/// Shared, timestamped command log.
#[derive(Debug, Clone)]
pub struct Recorder {
    start: Instant,
    events: Arc<Mutex<Vec<(Duration, Event)>>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, event: Event) {
        let at = self.start.elapsed();
        self.events.lock().unwrap().push((at, event));
    }

    pub fn timed(&self) -> Vec<(Duration, Event)> {
        self.events.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.timed().into_iter().map(|(_, event)| event).collect()
    }

    /// Commands sent to actors, ignoring the display.
    pub fn actor_commands(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| !matches!(event, Event::Title(_) | Event::Caption(_)))
            .collect()
    }

    pub fn last_state(&self, actor: &str) -> Option<ActorState> {
        self.events().into_iter().rev().find_map(|event| match event {
            Event::Apply(name, state) if name == actor => Some(state),
            _ => None,
        })
    }
}

/// How a fake voice behaves when asked to play.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum VoiceBehavior {
    /// Finish after the given clip length
    Plays(Duration),
    /// Refuse to load the clip
    FailsToLoad,
    /// Start, then drop the completion sender
    Abandons,
}

/// Actor with configurable capabilities that records every command.
pub struct FakeActor {
    name: String,
    recorder: Recorder,
    voice: VoiceBehavior,
    has_movement: bool,
    has_voice: bool,
    has_animator: bool,
}

#[allow(dead_code)]
impl FakeActor {
    pub fn new(name: &str, recorder: &Recorder) -> Self {
        Self {
            name: name.to_string(),
            recorder: recorder.clone(),
            voice: VoiceBehavior::Plays(Duration::from_secs(1)),
            has_movement: true,
            has_voice: true,
            has_animator: true,
        }
    }

    pub fn with_voice(mut self, voice: VoiceBehavior) -> Self {
        self.voice = voice;
        self
    }

    pub fn without_voice(mut self) -> Self {
        self.has_voice = false;
        self
    }

    pub fn without_movement(mut self) -> Self {
        self.has_movement = false;
        self
    }
}

impl Movement for FakeActor {
    fn look_at(&self, point: Position) {
        self.recorder.record(Event::LookAt(self.name.clone(), point));
    }

    fn move_to(&self, point: Position) {
        self.recorder.record(Event::MoveTo(self.name.clone(), point));
    }
}

impl Animator for FakeActor {
    fn apply(&self, state: ActorState) {
        self.recorder.record(Event::Apply(self.name.clone(), state));
    }
}

#[async_trait]
impl ClipPlayer for FakeActor {
    async fn play(&self, clip: &Path) -> ShowrunnerResult<ClipCompletion> {
        self.recorder
            .record(Event::Play(self.name.clone(), clip.to_path_buf()));

        match self.voice {
            VoiceBehavior::Plays(length) => {
                let (finished, completion) = ClipCompletion::channel();
                tokio::spawn(async move {
                    tokio::time::sleep(length).await;
                    finished.finish();
                });
                Ok(completion)
            }
            VoiceBehavior::FailsToLoad => Err(PlaybackError::new(
                PlaybackErrorKind::ClipFailed("unsupported format".to_string()),
            )
            .into()),
            VoiceBehavior::Abandons => {
                let (finished, completion) = ClipCompletion::channel();
                drop(finished);
                Ok(completion)
            }
        }
    }
}

impl Actor for FakeActor {
    fn name(&self) -> &str {
        &self.name
    }

    fn movement(&self) -> Option<&dyn Movement> {
        if self.has_movement { Some(self as &dyn Movement) } else { None }
    }

    fn voice(&self) -> Option<&dyn ClipPlayer> {
        if self.has_voice { Some(self as &dyn ClipPlayer) } else { None }
    }

    fn animator(&self) -> Option<&dyn Animator> {
        if self.has_animator { Some(self as &dyn Animator) } else { None }
    }
}

/// Registry over fixed actors and targets.
#[derive(Default)]
pub struct FakeStage {
    actors: HashMap<String, Arc<FakeActor>>,
    targets: HashMap<String, Position>,
}

#[allow(dead_code)]
impl FakeStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actor(mut self, actor: FakeActor, position: Position) -> Self {
        self.targets.insert(actor.name.clone(), position);
        self.actors.insert(actor.name.clone(), Arc::new(actor));
        self
    }

    pub fn with_target(mut self, name: &str, position: Position) -> Self {
        self.targets.insert(name.to_string(), position);
        self
    }
}

impl ActorRegistry for FakeStage {
    fn resolve_actor(&self, name: &str) -> Option<Arc<dyn Actor>> {
        self.actors
            .get(name)
            .map(|actor| Arc::clone(actor) as Arc<dyn Actor>)
    }

    fn resolve_target(&self, name: &str) -> Option<Target> {
        self.targets
            .get(name)
            .map(|position| Target::new(name, *position))
    }
}

/// Display that records into the same log as the actors.
pub struct FakeDisplay {
    recorder: Recorder,
}

impl FakeDisplay {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl StatusDisplay for FakeDisplay {
    fn show_title(&self, title: &str) {
        self.recorder.record(Event::Title(title.to_string()));
    }

    fn show_caption(&self, caption: &str) {
        self.recorder.record(Event::Caption(caption.to_string()));
    }
}

/// Write an episode directory with the given script and clip files.
#[allow(dead_code)]
pub fn write_episode(dir: &Path, script: &str, clips: &[&str]) -> showrunner_core::EpisodeHandle {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("script.json"), script).unwrap();
    for clip in clips {
        std::fs::write(dir.join(clip), b"RIFF").unwrap();
    }
    showrunner_core::EpisodeHandle::new(dir)
}
