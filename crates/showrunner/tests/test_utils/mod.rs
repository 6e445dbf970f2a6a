//! Fakes for the loop's collaborators.

use async_trait::async_trait;
use showrunner_core::{ActorState, EpisodeHandle, Position, SceneDescriptor};
use showrunner_error::{ShowrunnerError, ShowrunnerResult, SourceError, SourceErrorKind};
use showrunner_interface::{
    Actor, ActorRegistry, Animator, ClipCompletion, ClipPlayer, EpisodeLifecycle, EpisodeSource,
    Movement, SceneEnvironment, StatusDisplay, Target,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Source handing out a fixed sequence of episodes, then nothing.
#[derive(Default)]
pub struct ScriptedSource {
    queue: Mutex<VecDeque<EpisodeHandle>>,
    failure: Mutex<Option<ShowrunnerError>>,
    pub registered: Mutex<Vec<SceneDescriptor>>,
    pub requests: Mutex<usize>,
    pub retired: Mutex<Vec<EpisodeHandle>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(episodes: Vec<EpisodeHandle>) -> Self {
        Self {
            queue: Mutex::new(episodes.into()),
            ..Self::default()
        }
    }

    pub fn push(&self, episode: EpisodeHandle) {
        self.queue.lock().unwrap().push_back(episode);
    }

    /// Answer the next request with `err` instead of an episode.
    pub fn fail_next(&self, err: ShowrunnerError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn retired(&self) -> Vec<EpisodeHandle> {
        self.retired.lock().unwrap().clone()
    }

    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

#[async_trait]
impl EpisodeSource for ScriptedSource {
    async fn register(&self, descriptor: &SceneDescriptor) -> ShowrunnerResult<()> {
        self.registered.lock().unwrap().push(descriptor.clone());
        Ok(())
    }

    async fn next(&self) -> ShowrunnerResult<EpisodeHandle> {
        *self.requests.lock().unwrap() += 1;
        if let Some(err) = self.failure.lock().unwrap().take() {
            return Err(err);
        }
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SourceError::new(SourceErrorKind::NotAvailable).into())
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

#[async_trait]
impl EpisodeLifecycle for ScriptedSource {
    async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        self.retired.lock().unwrap().push(episode.clone());
        Ok(())
    }
}

/// Actor whose clips finish immediately; records animation states.
pub struct QuickActor {
    name: String,
    pub states: Mutex<Vec<ActorState>>,
    pub clips: Mutex<Vec<PathBuf>>,
}

impl QuickActor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            states: Mutex::new(Vec::new()),
            clips: Mutex::new(Vec::new()),
        }
    }
}

impl Movement for QuickActor {
    fn look_at(&self, _point: Position) {}

    fn move_to(&self, _point: Position) {}
}

impl Animator for QuickActor {
    fn apply(&self, state: ActorState) {
        self.states.lock().unwrap().push(state);
    }
}

#[async_trait]
impl ClipPlayer for QuickActor {
    async fn play(&self, clip: &Path) -> ShowrunnerResult<ClipCompletion> {
        self.clips.lock().unwrap().push(clip.to_path_buf());
        Ok(ClipCompletion::finished())
    }
}

impl Actor for QuickActor {
    fn name(&self) -> &str {
        &self.name
    }

    fn movement(&self) -> Option<&dyn Movement> {
        Some(self as &dyn Movement)
    }

    fn voice(&self) -> Option<&dyn ClipPlayer> {
        Some(self as &dyn ClipPlayer)
    }

    fn animator(&self) -> Option<&dyn Animator> {
        Some(self as &dyn Animator)
    }
}

/// Stage with a single actor and no other targets.
pub struct OneActorStage {
    pub actor: Arc<QuickActor>,
}

impl ActorRegistry for OneActorStage {
    fn resolve_actor(&self, name: &str) -> Option<Arc<dyn Actor>> {
        (name == self.actor.name).then(|| Arc::clone(&self.actor) as Arc<dyn Actor>)
    }

    fn resolve_target(&self, name: &str) -> Option<Target> {
        (name == self.actor.name).then(|| Target::new(name, Position::default()))
    }
}

/// Environment with fixed rosters.
pub struct FixedEnvironment;

impl SceneEnvironment for FixedEnvironment {
    fn scene_name(&self) -> String {
        "Studio".to_string()
    }

    fn actor_names(&self) -> Vec<String> {
        vec!["A".to_string()]
    }

    fn interactable_names(&self) -> Vec<String> {
        vec!["Couch".to_string()]
    }
}

/// Display keeping every title and caption.
#[derive(Default)]
pub struct RecordingDisplay {
    pub titles: Mutex<Vec<String>>,
    pub captions: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    pub fn captions(&self) -> Vec<String> {
        self.captions.lock().unwrap().clone()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }

    fn show_caption(&self, caption: &str) {
        self.captions.lock().unwrap().push(caption.to_string());
    }
}

/// Write an episode directory with a script and clip files.
#[allow(dead_code)]
pub fn write_episode(dir: &Path, script: &str, clips: &[&str]) -> EpisodeHandle {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("script.json"), script).unwrap();
    for clip in clips {
        std::fs::write(dir.join(clip), b"RIFF").unwrap();
    }
    EpisodeHandle::new(dir)
}
