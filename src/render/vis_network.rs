//! vis-network HTML document writer

use super::{RenderEdge, RenderNode, RenderOptions, RenderTarget, Renderer};
use crate::icons::Visual;
use crate::Result;
use serde_json::{json, Map, Value};

const VIS_NETWORK_JS: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// Collects nodes and edges and writes them into a vis-network page
#[derive(Debug, Default)]
pub struct VisNetwork {
    nodes: Vec<Value>,
    edges: Vec<Value>,
}

impl VisNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// vis-network `options` object
    fn network_options(options: &RenderOptions) -> Value {
        let physics = &options.physics;
        let mut network = json!({
            "physics": {
                "solver": "barnesHut",
                "barnesHut": {
                    "gravitationalConstant": physics.gravity,
                    "centralGravity": physics.central_gravity,
                    "springLength": physics.spring_length,
                    "damping": physics.damping,
                    "avoidOverlap": physics.overlap,
                },
            },
            "edges": {
                "arrows": { "to": { "enabled": options.directed } },
                "arrowStrikethrough": false,
                "smooth": { "type": "continuous" },
            },
            "interaction": { "hover": true },
        });

        if !options.buttons.is_empty() {
            let filter: Vec<&str> = options.buttons.iter().map(|b| b.as_str()).collect();
            network["configure"] = json!({
                "enabled": true,
                "filter": filter,
                "container": Value::Null,
            });
        }

        network
    }

    /// Produce the document for the collected graph
    pub fn generate_html(&self, options: &RenderOptions) -> Result<String> {
        let nodes = script_safe(serde_json::to_string(&self.nodes)?);
        let edges = script_safe(serde_json::to_string(&self.edges)?);
        let network_options = script_safe(serde_json::to_string(&Self::network_options(options))?);
        let container = html_escape(&options.container_id);
        let config_container = format!("{}-config", container);
        let has_buttons = !options.buttons.is_empty();

        let body = format!(
            r#"<div id="{container}" style="height: {height}; width: {width}; border: 1px solid lightgray;"></div>
{config_div}<script src="{js}"></script>
<script type="text/javascript">
(function () {{
  var nodes = new vis.DataSet({nodes});
  var edges = new vis.DataSet({edges});
  var options = {network_options};
  {config_hook}
  var container = document.getElementById("{container}");
  new vis.Network(container, {{ nodes: nodes, edges: edges }}, options);
}})();
</script>"#,
            container = container,
            height = html_escape(&options.height),
            width = html_escape(&options.width),
            config_div = if has_buttons {
                format!("<div id=\"{}\"></div>\n", config_container)
            } else {
                String::new()
            },
            js = VIS_NETWORK_JS,
            nodes = nodes,
            edges = edges,
            network_options = network_options,
            config_hook = if has_buttons {
                format!(
                    "options.configure.container = document.getElementById(\"{}\");",
                    config_container
                )
            } else {
                String::new()
            },
        );

        Ok(match options.target {
            RenderTarget::Embedded => body,
            RenderTarget::Standalone => format!(
                "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>STIX graph</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
                body
            ),
        })
    }
}

impl Renderer for VisNetwork {
    fn add_node(&mut self, node: RenderNode) {
        let mut entry = Map::new();
        entry.insert("id".to_string(), Value::String(node.id));
        entry.insert("label".to_string(), Value::String(node.label));
        entry.insert("shape".to_string(), Value::from(node.visual.shape()));
        match node.visual {
            Visual::Image(image) => entry.insert("image".to_string(), Value::String(image)),
            Visual::Color(color) => entry.insert("color".to_string(), Value::String(color)),
        };
        entry.insert("title".to_string(), Value::String(node.title));
        entry.insert("group".to_string(), Value::String(node.group));
        self.nodes.push(Value::Object(entry));
    }

    fn add_edge(&mut self, edge: RenderEdge) {
        self.edges.push(json!({
            "from": edge.from,
            "to": edge.to,
            "label": edge.label,
            "value": edge.weight,
        }));
    }
}

/// Keep embedded JSON from closing the surrounding script element
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ButtonPanel;

    fn sample() -> VisNetwork {
        let mut network = VisNetwork::new();
        network.add_node(RenderNode {
            id: "malware--1".to_string(),
            label: "Poison Ivy".to_string(),
            visual: Visual::Color("#FF0000".to_string()),
            title: "{\"name\": \"</script>\"}".to_string(),
            group: "sdo".to_string(),
        });
        network.add_edge(RenderEdge {
            from: "threat-actor--1".to_string(),
            to: "malware--1".to_string(),
            label: "uses".to_string(),
            weight: 0.4,
        });
        network
    }

    #[test]
    fn test_standalone_document() {
        let html = sample().generate_html(&RenderOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("vis-network"));
        assert!(html.contains("\"shape\":\"dot\""));
        assert!(html.contains("\"label\":\"uses\""));
        assert!(html.contains("\"gravitationalConstant\":-5000.0"));
    }

    #[test]
    fn test_embedded_fragment() {
        let html = sample()
            .generate_html(&RenderOptions::default().embedded())
            .unwrap();
        assert!(!html.contains("<html>"));
        assert!(html.starts_with("<div id=\"stix-graph\""));
    }

    #[test]
    fn test_script_injection_is_neutralized() {
        let html = sample().generate_html(&RenderOptions::default()).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_buttons_enable_configure() {
        let options = RenderOptions::default().with_buttons([ButtonPanel::Physics]);
        let html = sample().generate_html(&options).unwrap();
        assert!(html.contains("\"configure\""));
        assert!(html.contains("stix-graph-config"));

        let html = sample().generate_html(&RenderOptions::default()).unwrap();
        assert!(!html.contains("\"configure\""));
    }

    #[test]
    fn test_counts() {
        let network = sample();
        assert_eq!(network.node_count(), 1);
        assert_eq!(network.edge_count(), 1);
    }
}
