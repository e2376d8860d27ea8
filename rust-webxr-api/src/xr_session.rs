use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRSessionMode {
    Inline,
    ImmersiveVR,
}

/// The session side of a frame: its identity and whether it renders in stereo.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRSession {
    id: u32,
    mode: XRSessionMode,
}

impl XRSession {
    pub fn new(mode: XRSessionMode) -> XRSession {
        XRSession {
            id: utils::new_id(),
            mode,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn mode(&self) -> XRSessionMode {
        self.mode
    }

    /// Immersive sessions get a view per eye, inline sessions a single one.
    pub fn immersive(&self) -> bool {
        match self.mode {
            XRSessionMode::Inline => false,
            XRSessionMode::ImmersiveVR => true,
        }
    }
}
