//! In-memory SVG scene with its own transition clock.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;

use crate::error::SymbolError;
use crate::motion::TransitionTiming;
use crate::path::PathData;
use crate::shapes::Point;

use super::handle::{AnimationHandle, Completion, TransitionOutcome};
use super::Surface;

#[derive(Debug)]
struct ActiveTransition {
    from: PathData,
    to: PathData,
    started: Duration,
    timing: TransitionTiming,
    completion: Completion,
}

#[derive(Debug)]
enum ElementKind {
    Path { path: PathData, transition: Option<ActiveTransition> },
    Label { at: Point, text: String },
}

#[derive(Debug)]
struct Element {
    id: String,
    class: String,
    kind: ElementKind,
}

/// A retained SVG scene.
///
/// Elements are drawn in the order they were appended. Transitions advance
/// only when [`SvgSurface::tick`] moves the logical clock forward, so the
/// caller owns the timing loop.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<Element>,
    index: HashMap<String, usize>,
    now: Duration,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, elements: Vec::new(), index: HashMap::new(), now: Duration::ZERO }
    }

    /// Current value of the logical clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of elements in the scene
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ids in draw order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.id.as_str())
    }

    pub fn class_of(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.class.as_str())
    }

    /// Position and text of a label element
    pub fn label(&self, id: &str) -> Option<(Point, &str)> {
        match self.element(id).map(|e| &e.kind) {
            Some(ElementKind::Label { at, text }) => Some((*at, text.as_str())),
            _ => None,
        }
    }

    /// True while the element has a transition in flight
    pub fn is_animating(&self, id: &str) -> bool {
        matches!(
            self.element(id).map(|e| &e.kind),
            Some(ElementKind::Path { transition: Some(_), .. })
        )
    }

    /// Number of transitions still in flight
    pub fn active_transitions(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::Path { transition: Some(_), .. }))
            .count()
    }

    /// Advance the clock by `dt` and step every running transition.
    ///
    /// Transitions that reach their end snap to the target path and resolve
    /// their handle as completed.
    pub fn tick(&mut self, dt: Duration) {
        self.now += dt;
        let now = self.now;
        for element in &mut self.elements {
            let ElementKind::Path { path, transition } = &mut element.kind else {
                continue;
            };
            let Some(active) = transition.take() else {
                continue;
            };
            let elapsed = now.saturating_sub(active.started);
            if active.timing.progress(elapsed) >= 1.0 {
                *path = active.to;
                active.completion.resolve(TransitionOutcome::Completed);
                log::trace!("transition on '{}' completed", element.id);
            } else {
                *path = active.from.lerp(&active.to, active.timing.eased(elapsed));
                *transition = Some(active);
            }
        }
    }

    /// Tick until no transition is running, in steps of `step`
    pub fn settle(&mut self, step: Duration) {
        let step = if step.is_zero() { Duration::from_millis(1) } else { step };
        while self.active_transitions() > 0 {
            self.tick(step);
        }
    }

    /// Render the scene as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            let id = escape_xml(&element.id);
            let class = escape_xml(&element.class);
            match &element.kind {
                ElementKind::Path { path, .. } => {
                    let _ = writeln!(out, r#"  <path class="{}" id="{}" d="{}"/>"#, class, id, path);
                }
                ElementKind::Label { at, text } => {
                    let _ = writeln!(
                        out,
                        r#"  <text class="{}" id="{}" x="{}" y="{}">{}</text>"#,
                        class,
                        id,
                        at.x,
                        at.y,
                        escape_xml(text)
                    );
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    fn element(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    fn push(&mut self, id: &str, class: &str, kind: ElementKind) -> Result<(), SymbolError> {
        if self.index.contains_key(id) {
            return Err(SymbolError::DuplicateSymbolId(id.to_string()));
        }
        self.index.insert(id.to_string(), self.elements.len());
        self.elements.push(Element { id: id.to_string(), class: class.to_string(), kind });
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn append_path(&mut self, id: &str, class: &str, path: PathData) -> Result<(), SymbolError> {
        self.push(id, class, ElementKind::Path { path, transition: None })
    }

    fn append_label(&mut self, id: &str, class: &str, at: Point, text: &str) -> Result<(), SymbolError> {
        self.push(id, class, ElementKind::Label { at, text: text.to_string() })
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn path(&self, id: &str) -> Option<&PathData> {
        match self.element(id).map(|e| &e.kind) {
            Some(ElementKind::Path { path, .. }) => Some(path),
            _ => None,
        }
    }

    fn set_label_position(&mut self, id: &str, to: Point) -> Result<(), SymbolError> {
        let element = self.index.get(id).map(|&i| &mut self.elements[i]);
        match element.map(|e| &mut e.kind) {
            Some(ElementKind::Label { at, .. }) => {
                *at = to;
                Ok(())
            }
            _ => Err(SymbolError::SymbolNotFound(id.to_string())),
        }
    }

    fn animate_path(
        &mut self,
        id: &str,
        to: PathData,
        timing: &TransitionTiming,
    ) -> Result<AnimationHandle, SymbolError> {
        let now = self.now;
        let element = self.index.get(id).map(|&i| &mut self.elements[i]);
        let Some(ElementKind::Path { path, transition }) = element.map(|e| &mut e.kind) else {
            return Err(SymbolError::SymbolNotFound(id.to_string()));
        };

        // A newer transition retargets from wherever the path is drawn now
        if let Some(previous) = transition.take() {
            log::warn!("transition on '{}' interrupted by a newer one", id);
            previous.completion.resolve(TransitionOutcome::Interrupted);
        }

        if timing.duration.is_zero() {
            *path = to;
            return Ok(AnimationHandle::completed());
        }

        let (completion, handle) = AnimationHandle::pending();
        *transition = Some(ActiveTransition {
            from: path.clone(),
            to,
            started: now,
            timing: timing.clone(),
            completion,
        });
        Ok(handle)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
