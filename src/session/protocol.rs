//! Edit protocol - JSON command/response definitions

use serde::{Deserialize, Serialize};

use crate::core::types::ActorId;
use crate::voxel::voxel::Voxel;

/// An actor's request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub actor: ActorId,
    #[serde(flatten)]
    pub command: EditCommand,
}

/// Commands an actor can issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params")]
pub enum EditCommand {
    /// Set the first selection corner
    Pos1 { x: i32, y: i32, z: i32 },
    /// Set the second selection corner
    Pos2 { x: i32, y: i32, z: i32 },
    /// Fill the selection, optionally only over masked materials
    Set {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mask: Option<String>,
    },
    /// Replace cells matching `from` inside the selection
    Replace { from: String, to: String },
    /// Forget both selection corners
    ClearSelection,
    /// Copy the selection to the clipboard
    Copy,
    /// Paste the clipboard with its minimum corner at the given cell
    Paste { x: i32, y: i32, z: i32 },
    /// Undo the last change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Configure the active brush
    Brush {
        shape: String,
        radius: i32,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mask: Option<String>,
    },
    /// Stamp the active brush centred on the given cell
    Paint { x: i32, y: i32, z: i32 },
    /// Forget undo/redo history
    ClearHistory,
    /// Read one cell without changing anything
    Get { x: i32, y: i32, z: i32 },
}

/// Responses to an [`EditCommand`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum EditResponse {
    #[serde(rename = "ok")]
    Ok { data: ResponseData },
    #[serde(rename = "error")]
    Error { kind: ErrorKind, message: String },
}

/// Response data variants
///
/// Untagged, so variants with more fields are listed before ones whose
/// fields they contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    SelectionSet { corner: u8, position: [i32; 3] },
    Cell { position: [i32; 3], content: Voxel },
    Copied { cells: usize, size: [i32; 3] },
    BrushSet { shape: String, radius: i32 },
    Changed { cells: usize },
    None,
}

/// Machine-readable error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    IncompleteSelection,
    InvalidShapeParameter,
    InvalidContent,
    NoMatches,
    HistoryEmpty,
    EmptyClipboard,
    NoBrush,
    OutOfRange,
    VolumeTooLarge,
    WriteFailed,
    BadRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let json = r#"{"actor":3,"cmd":"Set","params":{"content":"stone","mask":"dirt,grass"}}"#;
        let request: EditRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.actor, ActorId(3));
        assert_eq!(
            request.command,
            EditCommand::Set { content: "stone".into(), mask: Some("dirt,grass".into()) }
        );

        let undo: EditRequest = serde_json::from_str(r#"{"actor":1,"cmd":"Undo"}"#).unwrap();
        assert_eq!(undo.command, EditCommand::Undo);
    }

    #[test]
    fn test_optional_mask_omitted() {
        let cmd = EditCommand::Brush { shape: "sphere".into(), radius: 2, content: "sand".into(), mask: None };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(!json.contains("mask"));
        let back: EditCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_response_wire_format() {
        let ok = EditResponse::Ok { data: ResponseData::Changed { cells: 8 } };
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"status":"ok","data":{"cells":8}}"#);

        let copied: EditResponse =
            serde_json::from_str(r#"{"status":"ok","data":{"cells":6,"size":[3,2,1]}}"#).unwrap();
        assert_eq!(copied, EditResponse::Ok { data: ResponseData::Copied { cells: 6, size: [3, 2, 1] } });

        let cell = EditResponse::Ok {
            data: ResponseData::Cell { position: [1, 2, 3], content: Voxel::from_rgb565(0x8410, 1) },
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(
            json,
            r#"{"status":"ok","data":{"position":[1,2,3],"content":{"color":33808,"material_id":1,"flags":0}}}"#
        );
        assert_eq!(serde_json::from_str::<EditResponse>(&json).unwrap(), cell);

        let err = EditResponse::Error { kind: ErrorKind::NoMatches, message: "no matching cells".into() };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""status":"error""#));
        assert!(json.contains(r#""kind":"no_matches""#));
    }
}
