
use crate::extended::ExtendedSchema;
use crate::help::{ConsoleHelp, FullHelp};

use serde_json::{Value, json};

/// A trimmed-down `/help?format=Full` with one of everything.
pub(crate) fn full_help_json() -> Value {
    json!({
        "functions": [
            {
                "name": "GetLolSummonerV1SummonersById",
                "description": "Get a summoner by id.",
                "http_method": "GET",
                "url": "/lol-summoner/v1/summoners/{id}",
                "arguments": [
                    { "name": "id", "optional": false, "type": { "type": "uint64", "elementType": "" } }
                ],
                "returns": { "type": "LolSummonerSummoner", "elementType": "" },
                "tags": ["$remoting-binding-module", "Plugin lol-summoner"]
            },
            {
                "name": "PostLolLobbyV2Lobby",
                "description": "",
                "http_method": "POST",
                "url": "/lol-lobby/v2/lobby",
                "arguments": [
                    { "name": "force", "optional": true, "type": { "type": "bool", "elementType": "" } },
                    { "name": "parameters", "optional": false, "type": { "type": "LolLobbyQueueParams", "elementType": "" } }
                ],
                "returns": { "type": "", "elementType": "" },
                "tags": ["Plugin lol-lobby"]
            },
            {
                "name": "GetAsset",
                "http_method": "GET",
                "url": "/{plugin}/assets/{+path}",
                "arguments": [
                    { "name": "plugin", "type": { "type": "string", "elementType": "" } },
                    { "name": "path", "type": { "type": "string", "elementType": "" } }
                ],
                "returns": { "type": "object", "elementType": "" },
                "tags": []
            },
            {
                "name": "Subscribe",
                "description": "Not an HTTP function.",
                "arguments": [],
                "returns": { "type": "", "elementType": "" },
                "tags": []
            }
        ],
        "events": [
            {
                "name": "OnJsonApiEvent_lol-gameflow_v1_session",
                "description": "",
                "type": { "type": "LolGameflowSession", "elementType": "" },
                "tags": []
            },
            {
                "name": "OnServiceProxyAsyncEvent",
                "description": "Service proxy events.",
                "type": { "type": "", "elementType": "" },
                "tags": []
            }
        ],
        "types": [
            {
                "name": "LolSummonerSummoner",
                "description": "A summoner.",
                "fields": [
                    { "name": "summonerId", "optional": false, "type": { "type": "uint64", "elementType": "" } },
                    { "name": "displayName", "optional": false, "type": { "type": "string", "elementType": "" } },
                    { "name": "rerollPoints", "optional": true, "type": { "type": "map", "elementType": "int32" } },
                    { "name": "team-ids", "optional": false, "type": { "type": "vector", "elementType": "LolSummonerTeam" } }
                ],
                "values": [],
                "tags": []
            },
            {
                "name": "LolGameflowPhase",
                "description": "",
                "fields": [],
                "values": [
                    { "name": "None", "value": 0 },
                    { "name": "Lobby", "value": 1 }
                ],
                "tags": []
            }
        ]
    })
}

pub(crate) fn console_help_json() -> Value {
    json!({
        "functions": {
            "PostLolLobbyV2Lobby": "Create a lobby.",
            "GetLolSummonerV1SummonersById": "Console text that should not win."
        },
        "events": {
            "OnJsonApiEvent_lol-gameflow_v1_session": "Gameflow session changed."
        },
        "types": {}
    })
}

pub(crate) fn extended_fixture() -> ExtendedSchema {
    let full = FullHelp::from_value(&full_help_json()).unwrap();
    let console = ConsoleHelp::from_value(&console_help_json()).unwrap();
    ExtendedSchema::derive(&full, &console)
}
