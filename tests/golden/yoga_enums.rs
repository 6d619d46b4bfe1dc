// Code generated by flexgen; DO NOT EDIT.
// @generated

use std::fmt;
use std::str::FromStr;

/// Returned when a string names no member of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedEnumValue {
    pub type_name: &'static str,
    pub value: String,
}

impl fmt::Display for UnrecognizedEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.type_name, self.value)
    }
}

impl std::error::Error for UnrecognizedEnumValue {}

/// Generated `Align` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Align(pub i32);

impl Align {
    pub const AUTO: Align = Align(0);
    pub const FLEX_START: Align = Align(1);
    pub const CENTER: Align = Align(2);
    pub const FLEX_END: Align = Align(3);
    pub const STRETCH: Align = Align(4);
    pub const BASELINE: Align = Align(5);
    pub const SPACE_BETWEEN: Align = Align(6);
    pub const SPACE_AROUND: Align = Align(7);
    pub const SPACE_EVENLY: Align = Align(8);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Align] {
        static VALUES: [Align; 9] = [
            Align::AUTO,
            Align::FLEX_START,
            Align::CENTER,
            Align::FLEX_END,
            Align::STRETCH,
            Align::BASELINE,
            Align::SPACE_BETWEEN,
            Align::SPACE_AROUND,
            Align::SPACE_EVENLY,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        9
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::AUTO => "auto",
            Align::FLEX_START => "flex-start",
            Align::CENTER => "center",
            Align::FLEX_END => "flex-end",
            Align::STRETCH => "stretch",
            Align::BASELINE => "baseline",
            Align::SPACE_BETWEEN => "space-between",
            Align::SPACE_AROUND => "space-around",
            Align::SPACE_EVENLY => "space-evenly",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Align::AUTO),
            "flex-start" => Ok(Align::FLEX_START),
            "center" => Ok(Align::CENTER),
            "flex-end" => Ok(Align::FLEX_END),
            "stretch" => Ok(Align::STRETCH),
            "baseline" => Ok(Align::BASELINE),
            "space-between" => Ok(Align::SPACE_BETWEEN),
            "space-around" => Ok(Align::SPACE_AROUND),
            "space-evenly" => Ok(Align::SPACE_EVENLY),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Align",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `BoxSizing` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BoxSizing(pub i32);

impl BoxSizing {
    pub const BORDER_BOX: BoxSizing = BoxSizing(0);
    pub const CONTENT_BOX: BoxSizing = BoxSizing(1);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [BoxSizing] {
        static VALUES: [BoxSizing; 2] = [
            BoxSizing::BORDER_BOX,
            BoxSizing::CONTENT_BOX,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        2
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            BoxSizing::BORDER_BOX => "border-box",
            BoxSizing::CONTENT_BOX => "content-box",
            _ => "unknown",
        }
    }
}

impl fmt::Display for BoxSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxSizing {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "border-box" => Ok(BoxSizing::BORDER_BOX),
            "content-box" => Ok(BoxSizing::CONTENT_BOX),
            _ => Err(UnrecognizedEnumValue {
                type_name: "BoxSizing",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Dimension` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Dimension(pub i32);

impl Dimension {
    pub const WIDTH: Dimension = Dimension(0);
    pub const HEIGHT: Dimension = Dimension(1);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Dimension] {
        static VALUES: [Dimension; 2] = [
            Dimension::WIDTH,
            Dimension::HEIGHT,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        2
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::WIDTH => "width",
            Dimension::HEIGHT => "height",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Dimension::WIDTH),
            "height" => Ok(Dimension::HEIGHT),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Dimension",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Direction` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Direction(pub i32);

impl Direction {
    pub const INHERIT: Direction = Direction(0);
    pub const LTR: Direction = Direction(1);
    pub const RTL: Direction = Direction(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Direction] {
        static VALUES: [Direction; 3] = [
            Direction::INHERIT,
            Direction::LTR,
            Direction::RTL,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::INHERIT => "inherit",
            Direction::LTR => "ltr",
            Direction::RTL => "rtl",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inherit" => Ok(Direction::INHERIT),
            "ltr" => Ok(Direction::LTR),
            "rtl" => Ok(Direction::RTL),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Display` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Display(pub i32);

impl Display {
    pub const FLEX: Display = Display(0);
    pub const NONE: Display = Display(1);
    pub const CONTENTS: Display = Display(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Display] {
        static VALUES: [Display; 3] = [
            Display::FLEX,
            Display::NONE,
            Display::CONTENTS,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Display::FLEX => "flex",
            Display::NONE => "none",
            Display::CONTENTS => "contents",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Display {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex" => Ok(Display::FLEX),
            "none" => Ok(Display::NONE),
            "contents" => Ok(Display::CONTENTS),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Display",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Edge` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Edge(pub i32);

impl Edge {
    pub const LEFT: Edge = Edge(0);
    pub const TOP: Edge = Edge(1);
    pub const RIGHT: Edge = Edge(2);
    pub const BOTTOM: Edge = Edge(3);
    pub const START: Edge = Edge(4);
    pub const END: Edge = Edge(5);
    pub const HORIZONTAL: Edge = Edge(6);
    pub const VERTICAL: Edge = Edge(7);
    pub const ALL: Edge = Edge(8);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Edge] {
        static VALUES: [Edge; 9] = [
            Edge::LEFT,
            Edge::TOP,
            Edge::RIGHT,
            Edge::BOTTOM,
            Edge::START,
            Edge::END,
            Edge::HORIZONTAL,
            Edge::VERTICAL,
            Edge::ALL,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        9
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::LEFT => "left",
            Edge::TOP => "top",
            Edge::RIGHT => "right",
            Edge::BOTTOM => "bottom",
            Edge::START => "start",
            Edge::END => "end",
            Edge::HORIZONTAL => "horizontal",
            Edge::VERTICAL => "vertical",
            Edge::ALL => "all",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Edge::LEFT),
            "top" => Ok(Edge::TOP),
            "right" => Ok(Edge::RIGHT),
            "bottom" => Ok(Edge::BOTTOM),
            "start" => Ok(Edge::START),
            "end" => Ok(Edge::END),
            "horizontal" => Ok(Edge::HORIZONTAL),
            "vertical" => Ok(Edge::VERTICAL),
            "all" => Ok(Edge::ALL),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Edge",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Errata` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Errata(pub u32);

impl Errata {
    pub const NONE: Errata = Errata(0x0);
    pub const STRETCH_FLEX_BASIS: Errata = Errata(0x1);
    pub const ABSOLUTE_POSITION_WITHOUT_INSETS_EXCLUDES_PADDING: Errata = Errata(0x2);
    pub const ABSOLUTE_PERCENT_AGAINST_INNER_SIZE: Errata = Errata(0x4);
    pub const ALL: Errata = Errata(0x7FFFFFFF);
    pub const CLASSIC: Errata = Errata(0x7FFFFFFE);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Errata] {
        static VALUES: [Errata; 6] = [
            Errata::NONE,
            Errata::STRETCH_FLEX_BASIS,
            Errata::ABSOLUTE_POSITION_WITHOUT_INSETS_EXCLUDES_PADDING,
            Errata::ABSOLUTE_PERCENT_AGAINST_INNER_SIZE,
            Errata::ALL,
            Errata::CLASSIC,
        ];
        &VALUES
    }

    /// Whether every flag set in `other` is also set in `self`.
    pub const fn contains(self, other: Errata) -> bool {
        self.0 & other.0 == other.0
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Errata::NONE => "none",
            Errata::STRETCH_FLEX_BASIS => "stretch-flex-basis",
            Errata::ABSOLUTE_POSITION_WITHOUT_INSETS_EXCLUDES_PADDING => "absolute-position-without-insets-excludes-padding",
            Errata::ABSOLUTE_PERCENT_AGAINST_INNER_SIZE => "absolute-percent-against-inner-size",
            Errata::ALL => "all",
            Errata::CLASSIC => "classic",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Errata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Errata {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Errata::NONE),
            "stretch-flex-basis" => Ok(Errata::STRETCH_FLEX_BASIS),
            "absolute-position-without-insets-excludes-padding" => Ok(Errata::ABSOLUTE_POSITION_WITHOUT_INSETS_EXCLUDES_PADDING),
            "absolute-percent-against-inner-size" => Ok(Errata::ABSOLUTE_PERCENT_AGAINST_INNER_SIZE),
            "all" => Ok(Errata::ALL),
            "classic" => Ok(Errata::CLASSIC),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Errata",
                value: s.to_string(),
            }),
        }
    }
}

impl std::ops::BitOr for Errata {
    type Output = Errata;

    fn bitor(self, rhs: Errata) -> Errata {
        Errata(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Errata {
    type Output = Errata;

    fn bitand(self, rhs: Errata) -> Errata {
        Errata(self.0 & rhs.0)
    }
}

/// Generated `ExperimentalFeature` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ExperimentalFeature(pub i32);

impl ExperimentalFeature {
    pub const WEB_FLEX_BASIS: ExperimentalFeature = ExperimentalFeature(0);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [ExperimentalFeature] {
        static VALUES: [ExperimentalFeature; 1] = [
            ExperimentalFeature::WEB_FLEX_BASIS,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        1
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ExperimentalFeature::WEB_FLEX_BASIS => "web-flex-basis",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ExperimentalFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperimentalFeature {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web-flex-basis" => Ok(ExperimentalFeature::WEB_FLEX_BASIS),
            _ => Err(UnrecognizedEnumValue {
                type_name: "ExperimentalFeature",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `FlexDirection` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FlexDirection(pub i32);

impl FlexDirection {
    pub const COLUMN: FlexDirection = FlexDirection(0);
    pub const COLUMN_REVERSE: FlexDirection = FlexDirection(1);
    pub const ROW: FlexDirection = FlexDirection(2);
    pub const ROW_REVERSE: FlexDirection = FlexDirection(3);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [FlexDirection] {
        static VALUES: [FlexDirection; 4] = [
            FlexDirection::COLUMN,
            FlexDirection::COLUMN_REVERSE,
            FlexDirection::ROW,
            FlexDirection::ROW_REVERSE,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        4
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            FlexDirection::COLUMN => "column",
            FlexDirection::COLUMN_REVERSE => "column-reverse",
            FlexDirection::ROW => "row",
            FlexDirection::ROW_REVERSE => "row-reverse",
            _ => "unknown",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlexDirection {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "column" => Ok(FlexDirection::COLUMN),
            "column-reverse" => Ok(FlexDirection::COLUMN_REVERSE),
            "row" => Ok(FlexDirection::ROW),
            "row-reverse" => Ok(FlexDirection::ROW_REVERSE),
            _ => Err(UnrecognizedEnumValue {
                type_name: "FlexDirection",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Gutter` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Gutter(pub i32);

impl Gutter {
    pub const COLUMN: Gutter = Gutter(0);
    pub const ROW: Gutter = Gutter(1);
    pub const ALL: Gutter = Gutter(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Gutter] {
        static VALUES: [Gutter; 3] = [
            Gutter::COLUMN,
            Gutter::ROW,
            Gutter::ALL,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Gutter::COLUMN => "column",
            Gutter::ROW => "row",
            Gutter::ALL => "all",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Gutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gutter {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "column" => Ok(Gutter::COLUMN),
            "row" => Ok(Gutter::ROW),
            "all" => Ok(Gutter::ALL),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Gutter",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Justify` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Justify(pub i32);

impl Justify {
    pub const FLEX_START: Justify = Justify(0);
    pub const CENTER: Justify = Justify(1);
    pub const FLEX_END: Justify = Justify(2);
    pub const SPACE_BETWEEN: Justify = Justify(3);
    pub const SPACE_AROUND: Justify = Justify(4);
    pub const SPACE_EVENLY: Justify = Justify(5);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Justify] {
        static VALUES: [Justify; 6] = [
            Justify::FLEX_START,
            Justify::CENTER,
            Justify::FLEX_END,
            Justify::SPACE_BETWEEN,
            Justify::SPACE_AROUND,
            Justify::SPACE_EVENLY,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        6
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Justify::FLEX_START => "flex-start",
            Justify::CENTER => "center",
            Justify::FLEX_END => "flex-end",
            Justify::SPACE_BETWEEN => "space-between",
            Justify::SPACE_AROUND => "space-around",
            Justify::SPACE_EVENLY => "space-evenly",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Justify {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Justify::FLEX_START),
            "center" => Ok(Justify::CENTER),
            "flex-end" => Ok(Justify::FLEX_END),
            "space-between" => Ok(Justify::SPACE_BETWEEN),
            "space-around" => Ok(Justify::SPACE_AROUND),
            "space-evenly" => Ok(Justify::SPACE_EVENLY),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Justify",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `LogLevel` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LogLevel(pub i32);

impl LogLevel {
    pub const ERROR: LogLevel = LogLevel(0);
    pub const WARN: LogLevel = LogLevel(1);
    pub const INFO: LogLevel = LogLevel(2);
    pub const DEBUG: LogLevel = LogLevel(3);
    pub const VERBOSE: LogLevel = LogLevel(4);
    pub const FATAL: LogLevel = LogLevel(5);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [LogLevel] {
        static VALUES: [LogLevel; 6] = [
            LogLevel::ERROR,
            LogLevel::WARN,
            LogLevel::INFO,
            LogLevel::DEBUG,
            LogLevel::VERBOSE,
            LogLevel::FATAL,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        6
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::ERROR => "error",
            LogLevel::WARN => "warn",
            LogLevel::INFO => "info",
            LogLevel::DEBUG => "debug",
            LogLevel::VERBOSE => "verbose",
            LogLevel::FATAL => "fatal",
            _ => "unknown",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(LogLevel::ERROR),
            "warn" => Ok(LogLevel::WARN),
            "info" => Ok(LogLevel::INFO),
            "debug" => Ok(LogLevel::DEBUG),
            "verbose" => Ok(LogLevel::VERBOSE),
            "fatal" => Ok(LogLevel::FATAL),
            _ => Err(UnrecognizedEnumValue {
                type_name: "LogLevel",
                value: s.to_string(),
            }),
        }
    }
}

#[used]
static KEEP_LOG_LEVEL: [LogLevel; 6] = [
    LogLevel::ERROR,
    LogLevel::WARN,
    LogLevel::INFO,
    LogLevel::DEBUG,
    LogLevel::VERBOSE,
    LogLevel::FATAL,
];

/// Generated `MeasureMode` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MeasureMode(pub i32);

impl MeasureMode {
    pub const UNDEFINED: MeasureMode = MeasureMode(0);
    pub const EXACTLY: MeasureMode = MeasureMode(1);
    pub const AT_MOST: MeasureMode = MeasureMode(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [MeasureMode] {
        static VALUES: [MeasureMode; 3] = [
            MeasureMode::UNDEFINED,
            MeasureMode::EXACTLY,
            MeasureMode::AT_MOST,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MeasureMode::UNDEFINED => "undefined",
            MeasureMode::EXACTLY => "exactly",
            MeasureMode::AT_MOST => "at-most",
            _ => "unknown",
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureMode {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(MeasureMode::UNDEFINED),
            "exactly" => Ok(MeasureMode::EXACTLY),
            "at-most" => Ok(MeasureMode::AT_MOST),
            _ => Err(UnrecognizedEnumValue {
                type_name: "MeasureMode",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `NodeType` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeType(pub i32);

impl NodeType {
    pub const DEFAULT: NodeType = NodeType(0);
    pub const TEXT: NodeType = NodeType(1);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [NodeType] {
        static VALUES: [NodeType; 2] = [
            NodeType::DEFAULT,
            NodeType::TEXT,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        2
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::DEFAULT => "default",
            NodeType::TEXT => "text",
            _ => "unknown",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NodeType::DEFAULT),
            "text" => Ok(NodeType::TEXT),
            _ => Err(UnrecognizedEnumValue {
                type_name: "NodeType",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Overflow` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Overflow(pub i32);

impl Overflow {
    pub const VISIBLE: Overflow = Overflow(0);
    pub const HIDDEN: Overflow = Overflow(1);
    pub const SCROLL: Overflow = Overflow(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Overflow] {
        static VALUES: [Overflow; 3] = [
            Overflow::VISIBLE,
            Overflow::HIDDEN,
            Overflow::SCROLL,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::VISIBLE => "visible",
            Overflow::HIDDEN => "hidden",
            Overflow::SCROLL => "scroll",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visible" => Ok(Overflow::VISIBLE),
            "hidden" => Ok(Overflow::HIDDEN),
            "scroll" => Ok(Overflow::SCROLL),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Overflow",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `PositionType` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PositionType(pub i32);

impl PositionType {
    pub const STATIC: PositionType = PositionType(0);
    pub const RELATIVE: PositionType = PositionType(1);
    pub const ABSOLUTE: PositionType = PositionType(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [PositionType] {
        static VALUES: [PositionType; 3] = [
            PositionType::STATIC,
            PositionType::RELATIVE,
            PositionType::ABSOLUTE,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PositionType::STATIC => "static",
            PositionType::RELATIVE => "relative",
            PositionType::ABSOLUTE => "absolute",
            _ => "unknown",
        }
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionType {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(PositionType::STATIC),
            "relative" => Ok(PositionType::RELATIVE),
            "absolute" => Ok(PositionType::ABSOLUTE),
            _ => Err(UnrecognizedEnumValue {
                type_name: "PositionType",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Unit` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Unit(pub i32);

impl Unit {
    pub const UNDEFINED: Unit = Unit(0);
    pub const POINT: Unit = Unit(1);
    pub const PERCENT: Unit = Unit(2);
    pub const AUTO: Unit = Unit(3);
    pub const MAX_CONTENT: Unit = Unit(4);
    pub const FIT_CONTENT: Unit = Unit(5);
    pub const STRETCH: Unit = Unit(6);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Unit] {
        static VALUES: [Unit; 7] = [
            Unit::UNDEFINED,
            Unit::POINT,
            Unit::PERCENT,
            Unit::AUTO,
            Unit::MAX_CONTENT,
            Unit::FIT_CONTENT,
            Unit::STRETCH,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        7
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::UNDEFINED => "undefined",
            Unit::POINT => "point",
            Unit::PERCENT => "percent",
            Unit::AUTO => "auto",
            Unit::MAX_CONTENT => "max-content",
            Unit::FIT_CONTENT => "fit-content",
            Unit::STRETCH => "stretch",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(Unit::UNDEFINED),
            "point" => Ok(Unit::POINT),
            "percent" => Ok(Unit::PERCENT),
            "auto" => Ok(Unit::AUTO),
            "max-content" => Ok(Unit::MAX_CONTENT),
            "fit-content" => Ok(Unit::FIT_CONTENT),
            "stretch" => Ok(Unit::STRETCH),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Generated `Wrap` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Wrap(pub i32);

impl Wrap {
    pub const NO_WRAP: Wrap = Wrap(0);
    pub const WRAP: Wrap = Wrap(1);
    pub const WRAP_REVERSE: Wrap = Wrap(2);

    /// Every named value, in declaration order.
    pub fn values() -> &'static [Wrap] {
        static VALUES: [Wrap; 3] = [
            Wrap::NO_WRAP,
            Wrap::WRAP,
            Wrap::WRAP_REVERSE,
        ];
        &VALUES
    }

    /// Number of named values.
    pub const fn count() -> usize {
        3
    }

    /// Canonical name of this value, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Wrap::NO_WRAP => "no-wrap",
            Wrap::WRAP => "wrap",
            Wrap::WRAP_REVERSE => "wrap-reverse",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wrap {
    type Err = UnrecognizedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-wrap" => Ok(Wrap::NO_WRAP),
            "wrap" => Ok(Wrap::WRAP),
            "wrap-reverse" => Ok(Wrap::WRAP_REVERSE),
            _ => Err(UnrecognizedEnumValue {
                type_name: "Wrap",
                value: s.to_string(),
            }),
        }
    }
}
