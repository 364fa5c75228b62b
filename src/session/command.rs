//! Executes protocol commands against a voxel world.

use super::config::EditConfig;
use super::protocol::{EditCommand, EditRequest, EditResponse, ErrorKind, ResponseData};
use super::service::EditingService;
use crate::core::error::EditError;
use crate::core::types::{ActorId, IVec3};
use crate::voxel::brush::{Brush, BrushShape};
use crate::voxel::material::MaterialTable;
use crate::voxel::voxel::Voxel;
use crate::voxel::world::VoxelWorld;

/// Parses text arguments with the material palette and drives an
/// [`EditingService`].
pub struct CommandExecutor {
    service: EditingService<Voxel>,
    materials: MaterialTable,
}

impl CommandExecutor {
    pub fn new(config: &EditConfig) -> Self {
        Self {
            service: EditingService::new(config),
            materials: config.material_table(),
        }
    }

    pub fn service(&self) -> &EditingService<Voxel> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut EditingService<Voxel> {
        &mut self.service
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Run one request and turn the outcome into a response.
    pub fn handle<W: VoxelWorld<Cell = Voxel>>(&mut self, world: &mut W, request: EditRequest) -> EditResponse {
        match self.execute(request.actor, world, request.command) {
            Ok(data) => EditResponse::Ok { data },
            Err(e) => {
                log::debug!("{}: {}", request.actor, e);
                EditResponse::Error { kind: error_kind(&e), message: e.to_string() }
            }
        }
    }

    /// Parse a JSON request line and run it.
    pub fn handle_json<W: VoxelWorld<Cell = Voxel>>(&mut self, world: &mut W, line: &str) -> EditResponse {
        match serde_json::from_str::<EditRequest>(line) {
            Ok(request) => self.handle(world, request),
            Err(e) => EditResponse::Error {
                kind: ErrorKind::BadRequest,
                message: format!("invalid request: {}", e),
            },
        }
    }

    pub fn execute<W: VoxelWorld<Cell = Voxel>>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        command: EditCommand,
    ) -> Result<ResponseData, EditError> {
        let data = match command {
            EditCommand::Pos1 { x, y, z } => {
                self.service.set_pos1(actor, IVec3::new(x, y, z));
                ResponseData::SelectionSet { corner: 1, position: [x, y, z] }
            }
            EditCommand::Pos2 { x, y, z } => {
                self.service.set_pos2(actor, IVec3::new(x, y, z));
                ResponseData::SelectionSet { corner: 2, position: [x, y, z] }
            }
            EditCommand::ClearSelection => {
                self.service.clear_selection(actor);
                ResponseData::None
            }
            EditCommand::Set { content, mask } => {
                let content = self.materials.parse_content(&content)?;
                let mask = mask.as_deref().and_then(|m| self.materials.parse_mask(m));
                let cells = self.service.fill(actor, world, mask.as_ref(), &content)?;
                ResponseData::Changed { cells }
            }
            EditCommand::Replace { from, to } => {
                let from = self.materials.parse_pattern(&from)?;
                let to = self.materials.parse_content(&to)?;
                let cells = self.service.replace(actor, world, &from, &to)?;
                ResponseData::Changed { cells }
            }
            EditCommand::Copy => {
                let cells = self.service.copy(actor, &*world)?;
                let size = self
                    .service
                    .session(actor)
                    .and_then(|s| s.clipboard())
                    .map(|c| c.size().to_array())
                    .unwrap_or_default();
                ResponseData::Copied { cells, size }
            }
            EditCommand::Paste { x, y, z } => {
                let cells = self.service.paste(actor, world, IVec3::new(x, y, z))?;
                ResponseData::Changed { cells }
            }
            EditCommand::Undo => ResponseData::Changed { cells: self.service.undo(actor, world)? },
            EditCommand::Redo => ResponseData::Changed { cells: self.service.redo(actor, world)? },
            EditCommand::Brush { shape, radius, content, mask } => {
                let shape = BrushShape::parse(&shape, radius)?;
                let content = self.materials.parse_content(&content)?;
                let mask = mask.as_deref().and_then(|m| self.materials.parse_mask(m));
                self.service.set_brush(actor, Brush::new(shape, content, mask));
                ResponseData::BrushSet { shape: shape.name().to_string(), radius: shape.radius() }
            }
            EditCommand::Paint { x, y, z } => {
                let cells = self.service.paint(actor, world, IVec3::new(x, y, z))?;
                ResponseData::Changed { cells }
            }
            EditCommand::Get { x, y, z } => ResponseData::Cell {
                position: [x, y, z],
                content: world.get_content(IVec3::new(x, y, z)),
            },
            EditCommand::ClearHistory => {
                self.service.clear_history(actor);
                ResponseData::None
            }
        };
        Ok(data)
    }
}

fn error_kind(error: &EditError) -> ErrorKind {
    match error {
        EditError::IncompleteSelection => ErrorKind::IncompleteSelection,
        EditError::InvalidShapeParameter(_) => ErrorKind::InvalidShapeParameter,
        EditError::InvalidContent(_) => ErrorKind::InvalidContent,
        EditError::NoMatches => ErrorKind::NoMatches,
        EditError::HistoryEmpty(_) => ErrorKind::HistoryEmpty,
        EditError::EmptyClipboard => ErrorKind::EmptyClipboard,
        EditError::NoBrush => ErrorKind::NoBrush,
        EditError::OutOfRange(_) => ErrorKind::OutOfRange,
        EditError::VolumeTooLarge { .. } => ErrorKind::VolumeTooLarge,
        EditError::WriteFailed { .. } => ErrorKind::WriteFailed,
    }
}
