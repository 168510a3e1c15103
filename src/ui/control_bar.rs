//! Control bar injected into the alerts page.
//!
//! Installed with `with_initialization_script`, so it is re-created on every
//! navigation and reload. Button clicks go back to Rust over `window.ipc`
//! as `{"cmd": "..."}` messages parsed by `types::action::trigger_from_ipc`.

use crate::types::config::ShellConfig;

const CONTROL_BAR_CSS: &str = r#"
.hfc-shell-controls{position:fixed;left:0;bottom:0;width:100%;box-sizing:border-box;z-index:2147483647;
  display:flex;flex-direction:column;align-items:center;padding:10px;background:#f8f9fa;
  border-top:1px solid #dee2e6;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif}
.hfc-shell-buttons{display:flex;gap:10px;margin-bottom:10px}
.hfc-shell-button{background:#0d6efd;color:#fff;border:none;padding:8px 16px;border-radius:4px;cursor:pointer;font-weight:bold}
.hfc-shell-button:hover{background:#0b5ed7}
.hfc-shell-disclaimer{margin:0 20px;max-width:80%;text-align:center;font-size:0.9rem;color:#212529}
.hfc-shell-version{margin-top:5px;font-size:0.8rem;color:#6c757d}
.hfc-shell-status{margin-top:2px;font-size:0.75rem;color:#198754}
"#;

/// Builds the initialization script for `config`.
///
/// Text is embedded as JSON string literals so quotes or markup in the
/// disclaimer cannot break out of the script.
pub fn control_bar_script(config: &ShellConfig) -> String {
    let css = serde_json::to_string(CONTROL_BAR_CSS).unwrap_or_else(|_| "\"\"".into());
    let disclaimer = serde_json::to_string(&config.disclaimer).unwrap_or_else(|_| "\"\"".into());
    let version =
        serde_json::to_string(&config.version_label()).unwrap_or_else(|_| "\"\"".into());

    format!(
        r#"(function(){{
if(window.top!==window||window.__hfcShellInstalled)return;
window.__hfcShellInstalled=true;
function post(cmd){{if(window.ipc)window.ipc.postMessage(JSON.stringify({{cmd:cmd}}));}}
var status=null;
function keepAudio(){{
  document.querySelectorAll('audio').forEach(function(a){{
    a.muted=false;
    if(a.paused&&a.currentTime===0){{
      var p=a.play();
      if(p!==undefined)p.catch(function(e){{console.log('Auto-play prevented by browser policy:',e);}});
    }}
  }});
  if(status)status.textContent='Connection active - Last check: '+new Date().toLocaleTimeString();
}}
function install(){{
  var style=document.createElement('style');
  style.textContent={css};
  document.head.appendChild(style);
  var bar=document.createElement('div');
  bar.className='hfc-shell-controls';
  var buttons=document.createElement('div');
  buttons.className='hfc-shell-buttons';
  [['Open in Browser','open_in_browser'],['Refresh','refresh']].forEach(function(b){{
    var btn=document.createElement('button');
    btn.className='hfc-shell-button';
    btn.textContent=b[0];
    btn.addEventListener('click',function(){{post(b[1]);}});
    buttons.appendChild(btn);
  }});
  bar.appendChild(buttons);
  var disclaimer=document.createElement('p');
  disclaimer.className='hfc-shell-disclaimer';
  var label=document.createElement('b');
  label.textContent='DISCLAIMER: ';
  disclaimer.appendChild(label);
  disclaimer.appendChild(document.createTextNode({disclaimer}));
  bar.appendChild(disclaimer);
  var version=document.createElement('small');
  version.className='hfc-shell-version';
  version.textContent={version};
  bar.appendChild(version);
  status=document.createElement('small');
  status.className='hfc-shell-status';
  status.textContent='Connection active';
  bar.appendChild(status);
  document.body.appendChild(bar);
  document.body.style.paddingBottom=bar.offsetHeight+'px';
  keepAudio();
  setInterval(keepAudio,5000);
  new MutationObserver(keepAudio).observe(document.body,{{childList:true,subtree:true}});
}}
if(document.readyState==='loading')document.addEventListener('DOMContentLoaded',install);else install();
}})();"#,
        css = css,
        disclaimer = disclaimer,
        version = version,
    )
}
