//! Box topology: the six panels, their nominal sizes, and edge roles.
//!
//! Roles depend only on panel identity. Every physical seam pairs exactly
//! one tab-emitting edge with one slot-accepting edge; the corners would
//! otherwise collide instead of interlocking.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::BoxParameters;

/// Identity of one of the six box faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelId {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::Front,
        PanelId::Back,
        PanelId::Left,
        PanelId::Right,
        PanelId::Top,
        PanelId::Bottom,
    ];

    /// Human-readable panel label, used on the cut sheet.
    pub fn label(&self) -> &'static str {
        match self {
            PanelId::Front => "Front",
            PanelId::Back => "Back",
            PanelId::Left => "Left",
            PanelId::Right => "Right",
            PanelId::Top => "Top",
            PanelId::Bottom => "Bottom",
        }
    }

    /// Edge roles for this panel.
    pub fn roles(&self) -> EdgeRoleSet {
        use EdgeRole::{SlotAccepting as S, TabEmitting as T};
        match self {
            PanelId::Front => EdgeRoleSet::new(S, T, S, S),
            PanelId::Back => EdgeRoleSet::new(S, S, S, T),
            PanelId::Left => EdgeRoleSet::new(S, T, S, T),
            PanelId::Right => EdgeRoleSet::new(S, S, S, S),
            PanelId::Top => EdgeRoleSet::new(T, T, T, T),
            PanelId::Bottom => EdgeRoleSet::new(T, T, T, T),
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the four sides of a panel, in clockwise trace order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Whether a panel edge protrudes tabs into its neighbor or recedes to
/// receive the neighbor's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRole {
    TabEmitting,
    SlotAccepting,
}

/// Role of each of a panel's four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRoleSet {
    pub top: EdgeRole,
    pub right: EdgeRole,
    pub bottom: EdgeRole,
    pub left: EdgeRole,
}

impl EdgeRoleSet {
    const fn new(top: EdgeRole, right: EdgeRole, bottom: EdgeRole, left: EdgeRole) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn role(&self, side: Side) -> EdgeRole {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }
}

/// Nominal size and edge roles for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub id: PanelId,
    pub w: f64,
    pub h: f64,
    pub roles: EdgeRoleSet,
}

/// One panel edge, addressed by panel identity and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEdge {
    pub panel: PanelId,
    pub side: Side,
}

/// A physical seam between two adjoining panel edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seam {
    pub a: PanelEdge,
    pub b: PanelEdge,
}

const fn seam(pa: PanelId, sa: Side, pb: PanelId, sb: Side) -> Seam {
    Seam {
        a: PanelEdge {
            panel: pa,
            side: sa,
        },
        b: PanelEdge {
            panel: pb,
            side: sb,
        },
    }
}

/// Map the box dimensions onto the six panels with their edge roles.
///
/// Pure and total for any parameter set; validation happens at the
/// [`BoxParameters`] boundary before this stage.
pub fn panels_for(params: &BoxParameters) -> [PanelSpec; 6] {
    let (w, h, d) = (params.width, params.height, params.depth);
    PanelId::ALL.map(|id| {
        let (pw, ph) = match id {
            PanelId::Front | PanelId::Back => (w, h),
            PanelId::Left | PanelId::Right => (d, h),
            PanelId::Top | PanelId::Bottom => (w, d),
        };
        PanelSpec {
            id,
            w: pw,
            h: ph,
            roles: id.roles(),
        }
    })
}

/// Every physical seam of the assembled box: the four vertical corners,
/// plus the four seams each of the top and bottom panels share with the
/// side panels.
pub fn seams() -> [Seam; 12] {
    use PanelId::*;
    use Side::{Bottom as B, Left as L, Right as R, Top as T};
    [
        seam(Front, L, Left, R),
        seam(Front, R, Right, L),
        seam(Back, L, Right, R),
        seam(Back, R, Left, L),
        seam(Top, B, Front, T),
        seam(Top, T, Back, T),
        seam(Top, L, Left, T),
        seam(Top, R, Right, T),
        seam(Bottom, T, Front, B),
        seam(Bottom, B, Back, B),
        seam(Bottom, L, Left, B),
        seam(Bottom, R, Right, B),
    ]
}
