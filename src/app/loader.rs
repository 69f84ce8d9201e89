use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Instant,
};

use log::{debug, warn};

use crate::image_utils::{load_for_display, DecodedImage};

pub const CACHE_CAPACITY: usize = 10;

/// Decodes images on a background thread and keeps the most recent results,
/// so stepping back through the history does not decode again.
pub struct Loader {
    decoded_rx: Receiver<DecodedImage>,
    path_tx: Sender<PathBuf>,
    pending: HashSet<PathBuf>,
    cache: HashMap<PathBuf, DecodedImage>,
    order: VecDeque<PathBuf>,
}

impl Loader {
    pub fn new() -> Self {
        let (decoded_rx, path_tx) = Self::spawn_decoder();
        Self {
            decoded_rx,
            path_tx,
            pending: HashSet::new(),
            cache: HashMap::new(),
            order: VecDeque::with_capacity(CACHE_CAPACITY),
        }
    }

    fn spawn_decoder() -> (Receiver<DecodedImage>, Sender<PathBuf>) {
        let (decoded_tx, decoded_rx) = mpsc::channel();
        let (path_tx, path_rx) = mpsc::channel::<PathBuf>();

        thread::spawn(move || {
            while let Ok(path) = path_rx.recv() {
                let start = Instant::now();
                let color_image = match load_for_display(&path) {
                    Ok(image) => Some(image),
                    Err(err) => {
                        warn!("{err:#}");
                        None
                    }
                };
                let decoded = DecodedImage {
                    path,
                    color_image,
                    load_duration: start.elapsed(),
                };
                if decoded_tx.send(decoded).is_err() {
                    break;
                }
            }
        });
        (decoded_rx, path_tx)
    }

    /// Queues `path` unless it is cached or already on its way.
    pub fn request(&mut self, path: &Path) {
        if self.cache.contains_key(path) || self.pending.contains(path) {
            return;
        }
        if self.path_tx.send(path.to_path_buf()).is_ok() {
            self.pending.insert(path.to_path_buf());
        } else {
            warn!("Image decoder is gone, cannot load {}", path.display());
        }
    }

    /// Moves finished decodes into the cache. Returns how many arrived.
    pub fn update(&mut self) -> usize {
        let mut arrived = 0;
        while let Ok(decoded) = self.decoded_rx.try_recv() {
            debug!(
                "Decoded {} in {:?}",
                decoded.path.display(),
                decoded.load_duration
            );
            self.pending.remove(&decoded.path);
            self.insert(decoded);
            arrived += 1;
        }
        arrived
    }

    pub fn get(&self, path: &Path) -> Option<&DecodedImage> {
        self.cache.get(path)
    }

    pub fn is_pending(&self, path: &Path) -> bool {
        self.pending.contains(path)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn insert(&mut self, decoded: DecodedImage) {
        let path = decoded.path.clone();
        if self.cache.insert(path.clone(), decoded).is_some() {
            self.order.retain(|p| p != &path);
        }
        self.order.push_back(path);
        while self.order.len() > CACHE_CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.cache.remove(&oldest);
            }
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
