//! The vocabulary this extension recognizes.
//!
//! Routing is a match over closed enumerations; anything that does not
//! parse into one of these kinds is outside the schema.

/// Namespace owned by this extension.
pub const BAL_NAMESPACE: &str = "http://wixtoolset.org/schemas/v4/wxs/bal";

/// Namespace of the host language's own elements.
pub const WIX_NAMESPACE: &str = "http://wixtoolset.org/schemas/v4/wxs";

/// Host elements that may contain markup from this extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentKind {
    Bundle,
    Fragment,
    BootstrapperApplicationRef,
    Variable,
}

impl ParentKind {
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "Bundle" => Some(ParentKind::Bundle),
            "Fragment" => Some(ParentKind::Fragment),
            "BootstrapperApplicationRef" => Some(ParentKind::BootstrapperApplicationRef),
            "Variable" => Some(ParentKind::Variable),
            _ => None,
        }
    }
}

/// Elements defined by this extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalElement {
    Condition,
    WixStandardBootstrapperApplication,
    WixManagedBootstrapperApplicationHost,
}

impl BalElement {
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "Condition" => Some(BalElement::Condition),
            "WixStandardBootstrapperApplication" => {
                Some(BalElement::WixStandardBootstrapperApplication)
            }
            "WixManagedBootstrapperApplicationHost" => {
                Some(BalElement::WixManagedBootstrapperApplicationHost)
            }
            _ => None,
        }
    }

    pub fn local_name(&self) -> &'static str {
        match self {
            BalElement::Condition => "Condition",
            BalElement::WixStandardBootstrapperApplication => "WixStandardBootstrapperApplication",
            BalElement::WixManagedBootstrapperApplicationHost => {
                "WixManagedBootstrapperApplicationHost"
            }
        }
    }
}

/// Attributes this extension places on host elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalAttribute {
    Overridable,
}

impl BalAttribute {
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "Overridable" => Some(BalAttribute::Overridable),
            _ => None,
        }
    }
}

/// Which element validator handles `element` under `parent`, if any.
pub fn route_element(parent: ParentKind, element: BalElement) -> Option<BalElement> {
    match (parent, element) {
        (ParentKind::Bundle | ParentKind::Fragment, BalElement::Condition)
        | (
            ParentKind::BootstrapperApplicationRef,
            BalElement::WixStandardBootstrapperApplication
            | BalElement::WixManagedBootstrapperApplicationHost,
        ) => Some(element),
        _ => None,
    }
}
