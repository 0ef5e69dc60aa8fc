//! Texture layout classifier.
//!
//! Samples all six faces of a block and derives its [`Category`]. Faults never
//! escape: a face whose query or icon name fails yields [`Category::Error`], a
//! panic while analysing the sampled faces yields [`Category::Unknown`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::category::Category;
use crate::entity::{Entity, Face, Icon};
use crate::error::FaceError;
use crate::scan_log::ScanLog;

/// Metadata variant passed to every face query.
pub const VARIANT: u32 = 0;

/// Category of one block together with the icon names resolved on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inspection {
    pub category: Category,
    /// Per face; `None` for untextured faces and faces never reached.
    pub icons: [Option<String>; 6],
}

/// Shape of a fully sampled face set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Uniform,
    Varied,
    Untextured,
    PartialUniform,
    PartialVaried,
}

impl Layout {
    /// Partial layouts stay [`Category::CustomRender`] whether or not the
    /// textured faces agree.
    pub fn category(self) -> Category {
        match self {
            Layout::Uniform => Category::Standard,
            Layout::Varied => Category::Directional,
            Layout::Untextured | Layout::PartialUniform | Layout::PartialVaried => {
                Category::CustomRender
            }
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Layout::Uniform => "every face uses the same texture, standard block",
            Layout::Varied => "faces use different textures, directional block",
            Layout::Untextured => "no face has a texture, fully custom rendered",
            Layout::PartialUniform => {
                "some faces lack a texture, the rest share one, partially custom rendered"
            }
            Layout::PartialVaried => {
                "some faces lack a texture, the rest differ, mixed rendering"
            }
        }
    }
}

/// The six texture slots of one block, indexed by [`Face::index`].
#[derive(Debug)]
pub struct FaceSamples<I> {
    slots: [Option<Arc<I>>; 6],
}

impl<I> FaceSamples<I> {
    pub fn new(slots: [Option<Arc<I>>; 6]) -> Self {
        Self { slots }
    }

    pub fn has_absent(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    pub fn all_absent(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Every present slot holds the same reference as the first present one.
    /// Stops at the first divergence.
    pub fn all_same_present(&self) -> bool {
        let mut present = self.slots.iter().flatten();
        let Some(first) = present.next() else {
            return true;
        };
        present.all(|icon| Arc::ptr_eq(first, icon))
    }

    pub fn layout(&self) -> Layout {
        if self.all_absent() {
            return Layout::Untextured;
        }
        match (self.has_absent(), self.all_same_present()) {
            (true, true) => Layout::PartialUniform,
            (true, false) => Layout::PartialVaried,
            (false, true) => Layout::Uniform,
            (false, false) => Layout::Varied,
        }
    }
}

pub fn classify<E: Entity>(entity: &E, registry_name: &str, log: &mut ScanLog) -> Category {
    inspect(entity, registry_name, log).category
}

pub fn inspect<E: Entity>(entity: &E, registry_name: &str, log: &mut ScanLog) -> Inspection {
    log.info("  analysing texture layout:");
    let mut icons: [Option<String>; 6] = Default::default();

    let samples = match sample_faces(entity, registry_name, &mut icons, log) {
        Ok(samples) => samples,
        Err((face, e)) => {
            log.info(format!(
                "  face {} ({}) query failed: {}",
                face.index(),
                face.name(),
                e
            ));
            return Inspection {
                category: Category::Error,
                icons,
            };
        }
    };

    let category = match guarded(|| samples.layout()) {
        Ok(layout) => {
            log.info(format!("  result: {}", layout.summary()));
            layout.category()
        }
        Err(msg) => {
            log.info(format!("  texture analysis failed: {}", msg));
            Category::Unknown
        }
    };
    Inspection { category, icons }
}

/// Queries faces in order, logging each one as it answers. Stops at the first
/// face whose query or icon name fails.
fn sample_faces<E: Entity>(
    entity: &E,
    registry_name: &str,
    icons: &mut [Option<String>; 6],
    log: &mut ScanLog,
) -> Result<FaceSamples<E::Icon>, (Face, FaceError)> {
    let mut slots: [Option<Arc<E::Icon>>; 6] = Default::default();
    for face in Face::ALL {
        let icon = entity.face_icon(face, VARIANT).map_err(|e| (face, e))?;
        match &icon {
            Some(icon) => {
                let name = icon.icon_name().map_err(|e| (face, FaceError::from(e)))?;
                log_face_texture(face, name, registry_name, log);
                icons[face.index()] = Some(name.to_string());
            }
            None => log.info(format!("  face {} ({}): no texture", face.index(), face.name())),
        }
        slots[face.index()] = icon;
    }
    Ok(FaceSamples::new(slots))
}

fn log_face_texture(face: Face, name: &str, registry_name: &str, log: &mut ScanLog) {
    match texture_path_hint(name, registry_name) {
        Some(path) => log.info(format!(
            "  face {} ({}) texture: {} (likely file: {})",
            face.index(),
            face.name(),
            name,
            path
        )),
        None => log.info(format!(
            "  face {} ({}) texture: {}",
            face.index(),
            face.name(),
            name
        )),
    }
}

/// Runs a post-sampling step, turning a panic into its message.
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Probable resource path of an icon, using the icon's own namespace when it
/// has one and the block's otherwise.
pub fn texture_path_hint(icon_name: &str, registry_name: &str) -> Option<String> {
    if let Some((ns, name)) = icon_name.split_once(':') {
        Some(format!("{ns}:textures/blocks/{name}.png"))
    } else {
        let (ns, _) = registry_name.split_once(':')?;
        Some(format!("{ns}:textures/blocks/{icon_name}.png"))
    }
}
