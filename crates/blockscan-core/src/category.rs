use std::ops::{Index, IndexMut};

use serde::Serialize;

/// Texture layout category of a block. Exactly one applies to every block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// All six faces share one texture.
    Standard = 0,
    /// All faces are textured, with at least two distinct textures.
    Directional = 1,
    /// At least one face has no texture.
    CustomRender = 2,
    /// A face query faulted.
    Error = 3,
    /// Analysis of the sampled faces faulted.
    Unknown = 4,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Directional,
        Category::CustomRender,
        Category::Error,
        Category::Unknown,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Directional => "DIRECTIONAL",
            Category::CustomRender => "CUSTOM_RENDER",
            Category::Error => "ERROR",
            Category::Unknown => "UNKNOWN",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Standard => "same texture on every face",
            Category::Directional => "different textures per face",
            Category::CustomRender => "at least one face without texture",
            Category::Error => "texture query raised a fault",
            Category::Unknown => "type could not be determined",
        }
    }
}

/// Fixed-size map with one slot per [`Category`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMap<T>([T; 5]);

impl<T> CategoryMap<T> {
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self(Category::ALL.map(&mut f))
    }

    /// Entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, c: Category) -> &T {
        &self.0[c.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    #[inline]
    fn index_mut(&mut self, c: Category) -> &mut T {
        &mut self.0[c.index()]
    }
}
