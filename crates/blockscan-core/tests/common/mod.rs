#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

use blockscan_core::{
    Entity, Face, FaceError, Icon, IconError, Registry, RegistryEntry, ScanError, ScanLog,
};

pub struct TestIcon {
    pub name: Option<String>,
}

impl Icon for TestIcon {
    fn icon_name(&self) -> Result<&str, IconError> {
        self.name
            .as_deref()
            .ok_or_else(|| IconError::Unnamed("anonymous".into()))
    }
}

pub fn icon(name: &str) -> Arc<TestIcon> {
    Arc::new(TestIcon {
        name: Some(name.into()),
    })
}

pub fn nameless_icon() -> Arc<TestIcon> {
    Arc::new(TestIcon { name: None })
}

#[derive(Clone)]
pub enum Slot {
    Tex(Arc<TestIcon>),
    Empty,
    Fault,
}

pub struct TestBlock {
    pub name: String,
    pub class: String,
    pub slots: [Slot; 6],
    pub queried: RefCell<Vec<usize>>,
}

impl TestBlock {
    pub fn new(name: &str, slots: [Slot; 6]) -> Self {
        Self {
            name: name.into(),
            class: "TestBlock".into(),
            slots,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn uniform(name: &str, tex: &Arc<TestIcon>) -> Self {
        Self::new(name, std::array::from_fn(|_| Slot::Tex(tex.clone())))
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = class.into();
        self
    }
}

impl Entity for TestBlock {
    type Icon = TestIcon;

    fn unlocalized_name(&self) -> &str {
        "tile.test"
    }

    fn type_name(&self) -> &str {
        &self.class
    }

    fn face_icon(&self, face: Face, variant: u32) -> Result<Option<Arc<TestIcon>>, FaceError> {
        assert_eq!(variant, 0);
        self.queried.borrow_mut().push(face.index());
        match &self.slots[face.index()] {
            Slot::Tex(t) => Ok(Some(t.clone())),
            Slot::Empty => Ok(None),
            Slot::Fault => Err(FaceError::Failed("getIcon exploded".into())),
        }
    }
}

pub enum TestEntry {
    Block(TestBlock),
    Item(String),
}

impl RegistryEntry for TestEntry {
    type Entity = TestBlock;

    fn as_entity(&self) -> Option<&TestBlock> {
        match self {
            TestEntry::Block(b) => Some(b),
            TestEntry::Item(_) => None,
        }
    }
}

#[derive(Default)]
pub struct TestRegistry {
    pub entries: Vec<TestEntry>,
    /// Iteration faults when it reaches this index.
    pub fail_at: Option<usize>,
    pub passes: Cell<u32>,
}

impl TestRegistry {
    pub fn of(blocks: Vec<TestBlock>) -> Self {
        Self {
            entries: blocks.into_iter().map(TestEntry::Block).collect(),
            ..Default::default()
        }
    }
}

impl Registry for TestRegistry {
    type Entry = TestEntry;

    fn entries(&self) -> impl Iterator<Item = Result<&TestEntry, ScanError>> {
        self.passes.set(self.passes.get() + 1);
        self.entries.iter().enumerate().map(move |(i, e)| {
            if self.fail_at == Some(i) {
                Err(ScanError::Unavailable("registry frozen".into()))
            } else {
                Ok(e)
            }
        })
    }

    fn id_of(&self, entity: &TestBlock) -> Result<u32, ScanError> {
        self.entries
            .iter()
            .position(|e| matches!(e, TestEntry::Block(b) if std::ptr::eq(b, entity)))
            .map(|i| i as u32 + 1)
            .ok_or_else(|| ScanError::Unregistered(entity.name.clone()))
    }

    fn name_of<'a>(&'a self, entity: &'a TestBlock) -> Result<&'a str, ScanError> {
        Ok(&entity.name)
    }
}

/// In-memory sink shared between a `ScanLog` and the test.
#[derive(Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("utf-8 log")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn memory_log() -> (ScanLog, SharedBuf) {
    let buf = SharedBuf::default();
    (ScanLog::from_writer(buf.clone(), "test-host 1.7.10"), buf)
}
