//! ONNX-backed chat backend: prompt build, prefill, KV-cache threaded decode,
//! sampling, and stop handling.

use std::borrow::Cow;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use tabagent_onnx_loader::ort;
use tabagent_onnx_loader::ort::session::SessionInputValue;
use tabagent_onnx_loader::OnnxSession;
use tabagent_tokenization::Tokenizer;

use crate::error::{ChatError, Result};
use crate::kv_cache::{KvCache, LayerKv, KV_LAYERS};
use crate::perf::ChatPerf;
use crate::prompt::{build_prompt, ChatMessage, Role};
use crate::sampler::Sampler;

/// Provider tag reported in chat perf telemetry. The chat backend has no
/// provider-selection heuristic of its own (unlike embedding's batch-size
/// routing): both sessions are fixed to whatever execution provider
/// `tabagent_onnx_loader` selected for this hardware at load time.
pub const CHAT_PROVIDER: &str = "onnx";

/// Context window for the registered chat model (§4.5 "Errors and limits").
pub const DEFAULT_CONTEXT_LIMIT: usize = 32_768;
pub const DEFAULT_MAX_NEW_TOKENS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<usize>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub stop: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ChatResult {
    pub text: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub finish_reason: FinishReason,
}

pub trait ChatBackend: Send + Sync {
    fn generate(&self, request: &ChatRequest, cancel: &AtomicBool) -> Result<ChatResult>;
    fn context_limit(&self) -> usize;
    /// Telemetry from the most recently completed generation on this
    /// instance, or `None` before any request has completed.
    fn last_perf(&self) -> Option<ChatPerf>;
}

/// One decoder step's freshly produced output: last-position logits plus the
/// next KV-cache layers and the sequence length they cover.
struct StepOutput {
    logits: Vec<f32>,
    next_layers: Vec<LayerKv>,
    next_seq_len: usize,
}

pub struct OnnxChatBackend {
    embed_session: OnnxSession,
    decoder_session: OnnxSession,
    tokenizer: Tokenizer,
    sampler: Sampler,
    context_limit: usize,
    eos_ids: Vec<u32>,
    last_perf: Mutex<Option<ChatPerf>>,
}

impl OnnxChatBackend {
    /// Loads the token-embedding session, the merged decoder session and the
    /// tokenizer from `model_dir` (expects `tokenizer.json` at the root and
    /// `onnx/embed_tokens_quantized.onnx` + `onnx/decoder_model_merged_q4.onnx`).
    pub fn load<P: AsRef<Path>>(model_dir: P, seed: u64) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let embed_session = OnnxSession::load(model_dir.join("onnx").join("embed_tokens_quantized.onnx"))?;
        let decoder_session = OnnxSession::load(model_dir.join("onnx").join("decoder_model_merged_q4.onnx"))?;
        let tokenizer = Tokenizer::from_file_or_heuristic(model_dir.join("tokenizer.json"));
        let eos_ids = compiled_eos_ids(&tokenizer);

        Ok(Self {
            embed_session,
            decoder_session,
            tokenizer,
            sampler: Sampler::new(seed),
            context_limit: DEFAULT_CONTEXT_LIMIT,
            eos_ids,
            last_perf: Mutex::new(None),
        })
    }

    /// Runs the token-embedding session over `token_ids`, returning the raw
    /// `inputs_embeds` and `per_layer_inputs` tensors (shape and data) the
    /// decoder step needs.
    fn run_embed(&self, token_ids: &[u32]) -> Result<(RawTensor, RawTensor)> {
        let seq = token_ids.len();
        let ids: Vec<i64> = token_ids.iter().map(|&id| id as i64).collect();
        let shape = [1i64, seq as i64];
        let input_ids = ort::value::Tensor::from_array((shape, ids))
            .map_err(|e| ChatError::Internal(format!("input_ids tensor: {e}")))?;

        let session_handle = self.embed_session.session();
        let mut guard = session_handle
            .lock()
            .map_err(|_| ChatError::Internal("embed session mutex poisoned".to_string()))?;
        let outputs = guard
            .run(ort::inputs!["input_ids" => input_ids])
            .map_err(|e| ChatError::Internal(format!("embed session run failed: {e}")))?;

        let inputs_embeds = extract_raw(&outputs, "inputs_embeds")?;
        let per_layer_inputs = extract_raw(&outputs, "per_layer_inputs")?;
        Ok((inputs_embeds, per_layer_inputs))
    }

    /// Runs one decoder step: builds `inputs_embeds`, `per_layer_inputs`,
    /// `position_ids` and the thirty past-KV pairs, then extracts the last
    /// position's logits and the thirty present-KV pairs.
    fn run_decoder_step(&self, token_ids: &[u32], position_offset: usize, past: &KvCache) -> Result<StepOutput> {
        let seq = token_ids.len();
        let (inputs_embeds, per_layer_inputs) = self.run_embed(token_ids)?;

        let position_ids: Vec<i64> = (position_offset..position_offset + seq).map(|p| p as i64).collect();
        let position_shape = [1i64, seq as i64];

        let mut named: Vec<(Cow<'_, str>, SessionInputValue<'_>)> = Vec::with_capacity(3 + KV_LAYERS * 2);

        let inputs_embeds_value =
            ort::value::Tensor::from_array((inputs_embeds.shape.clone(), inputs_embeds.data.clone()))
                .map_err(|e| ChatError::Internal(format!("inputs_embeds tensor: {e}")))?;
        named.push((Cow::Borrowed("inputs_embeds"), SessionInputValue::from(inputs_embeds_value)));

        let per_layer_value =
            ort::value::Tensor::from_array((per_layer_inputs.shape.clone(), per_layer_inputs.data.clone()))
                .map_err(|e| ChatError::Internal(format!("per_layer_inputs tensor: {e}")))?;
        named.push((Cow::Borrowed("per_layer_inputs"), SessionInputValue::from(per_layer_value)));

        let position_value = ort::value::Tensor::from_array((position_shape, position_ids))
            .map_err(|e| ChatError::Internal(format!("position_ids tensor: {e}")))?;
        named.push((Cow::Borrowed("position_ids"), SessionInputValue::from(position_value)));

        // Past KV tensors are owned here so they outlive the `run` call below.
        let past_shape = past.shape_for_layer();
        let mut past_names: Vec<(String, String)> = Vec::with_capacity(KV_LAYERS);
        for layer in 0..KV_LAYERS {
            past_names.push((past_key_name(layer), past_value_name(layer)));
        }
        for (layer, (key_name, value_name)) in past_names.iter().enumerate() {
            let key_value = ort::value::Tensor::from_array((past_shape, past.layers[layer].key.clone()))
                .map_err(|e| ChatError::Internal(format!("past key tensor layer {layer}: {e}")))?;
            named.push((Cow::Owned(key_name.clone()), SessionInputValue::from(key_value)));

            let val_value = ort::value::Tensor::from_array((past_shape, past.layers[layer].value.clone()))
                .map_err(|e| ChatError::Internal(format!("past value tensor layer {layer}: {e}")))?;
            named.push((Cow::Owned(value_name.clone()), SessionInputValue::from(val_value)));
        }

        let session_handle = self.decoder_session.session();
        let mut guard = session_handle
            .lock()
            .map_err(|_| ChatError::Internal("decoder session mutex poisoned".to_string()))?;
        let outputs = guard
            .run(named)
            .map_err(|e| ChatError::Internal(format!("decoder run failed: {e}")))?;

        let logits_tensor = extract_raw(&outputs, "logits")?;
        if logits_tensor.shape.len() != 3 {
            return Err(ChatError::Internal(format!("unexpected logits shape {:?}", logits_tensor.shape)));
        }
        let out_seq = logits_tensor.shape[1] as usize;
        let vocab = logits_tensor.shape[2] as usize;
        let last_row_start = (out_seq - 1) * vocab;
        let logits = logits_tensor.data[last_row_start..last_row_start + vocab].to_vec();

        let next_seq_len = position_offset + seq;
        let mut next_layers = Vec::with_capacity(KV_LAYERS);
        for layer in 0..KV_LAYERS {
            let key = extract_raw(&outputs, &present_key_name(layer))?;
            let value = extract_raw(&outputs, &present_value_name(layer))?;
            next_layers.push(LayerKv { key: key.data, value: value.data });
        }

        Ok(StepOutput { logits, next_layers, next_seq_len })
    }
}

impl ChatBackend for OnnxChatBackend {
    fn generate(&self, request: &ChatRequest, cancel: &AtomicBool) -> Result<ChatResult> {
        let start = Instant::now();
        let result = self.generate_inner(request, cancel);
        if let Ok(r) = &result {
            let total_ms = start.elapsed().as_secs_f64() * 1000.0;
            let perf = ChatPerf::new(CHAT_PROVIDER.to_string(), r.prompt_tokens, r.completion_tokens, total_ms, r.finish_reason);
            *self.last_perf.lock() = Some(perf);
        }
        result
    }

    fn context_limit(&self) -> usize {
        self.context_limit
    }

    fn last_perf(&self) -> Option<ChatPerf> {
        self.last_perf.lock().clone()
    }
}

impl OnnxChatBackend {
    fn generate_inner(&self, request: &ChatRequest, cancel: &AtomicBool) -> Result<ChatResult> {
        if request.messages.is_empty() {
            return Err(ChatError::InputInvalid("messages must be non-empty".to_string()));
        }

        let prompt = build_prompt(&request.messages);
        let prompt_ids = self.tokenizer.encode_prompt(&prompt)?;
        let prompt_tokens = prompt_ids.len();

        if prompt_tokens >= self.context_limit {
            return Err(ChatError::PromptTooLong { prompt_tokens, context_limit: self.context_limit });
        }

        let max_new_tokens = request.max_tokens.filter(|&n| n > 0).unwrap_or(DEFAULT_MAX_NEW_TOKENS);
        let temperature = request.temperature.unwrap_or(0.7);
        let top_p = request.top_p;

        let mut cache = KvCache::empty(KV_LAYERS);
        let mut step = self.run_decoder_step(&prompt_ids, 0, &cache)?;
        cache.advance(step.next_layers, step.next_seq_len).map_err(ChatError::Internal)?;

        let mut generated_ids: Vec<u32> = Vec::new();
        let mut finish_reason = FinishReason::Length;

        loop {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!(
                    prompt_tokens,
                    completion_tokens = generated_ids.len(),
                    "chat generation cancelled mid-decode"
                );
                finish_reason = FinishReason::Cancelled;
                break;
            }

            let next_id = self.sampler.sample(&step.logits, temperature, top_p);

            if self.eos_ids.contains(&next_id) {
                finish_reason = FinishReason::Stop;
                break;
            }

            generated_ids.push(next_id);
            let decoded = self.tokenizer.decode(&generated_ids, true)?;

            if let Some(stops) = &request.stop {
                if let Some(cut) = stops.iter().filter_map(|s| decoded.find(s.as_str())).min() {
                    let text = decoded[..cut].to_string();
                    return Ok(ChatResult {
                        text,
                        prompt_tokens,
                        completion_tokens: generated_ids.len(),
                        finish_reason: FinishReason::Stop,
                    });
                }
            }

            if prompt_tokens + generated_ids.len() >= self.context_limit {
                tracing::warn!(
                    prompt_tokens,
                    completion_tokens = generated_ids.len(),
                    context_limit = self.context_limit,
                    "chat generation stopped at context limit before a stop token was produced"
                );
                finish_reason = FinishReason::Length;
                break;
            }
            if generated_ids.len() >= max_new_tokens {
                finish_reason = FinishReason::Length;
                break;
            }

            let position_offset = prompt_tokens + generated_ids.len() - 1;
            step = self.run_decoder_step(&[next_id], position_offset, &cache)?;
            cache.advance(step.next_layers, step.next_seq_len).map_err(ChatError::Internal)?;
        }

        let text = self.tokenizer.decode(&generated_ids, true)?;
        Ok(ChatResult { text, prompt_tokens, completion_tokens: generated_ids.len(), finish_reason })
    }
}

#[derive(Debug, Clone)]
struct RawTensor {
    shape: Vec<i64>,
    data: Vec<f32>,
}

fn extract_raw(outputs: &ort::session::SessionOutputs<'_>, name: &str) -> Result<RawTensor> {
    let (shape, data) = outputs[name]
        .try_extract_tensor::<f32>()
        .map_err(|e| ChatError::Internal(format!("extract {name}: {e}")))?;
    Ok(RawTensor { shape: shape.iter().copied().collect(), data: data.to_vec() })
}

fn past_key_name(layer: usize) -> String {
    format!("past_key_values.{layer}.key")
}

fn past_value_name(layer: usize) -> String {
    format!("past_key_values.{layer}.value")
}

fn present_key_name(layer: usize) -> String {
    format!("present.{layer}.key")
}

fn present_value_name(layer: usize) -> String {
    format!("present.{layer}.value")
}

/// Derives the EOS id set from the tokenizer: its generic end-of-sequence
/// token plus the chat end-of-turn marker, when present. A future
/// refinement should parse `generation_config.json` when shipped alongside
/// the model instead of deriving this from the tokenizer vocabulary.
fn compiled_eos_ids(tokenizer: &Tokenizer) -> Vec<u32> {
    let mut ids = Vec::new();
    if let Some(id) = tokenizer.eos_token_id() {
        ids.push(id);
    }
    if let Ok(end_of_turn) = tokenizer.encode("<end_of_turn>", false) {
        if end_of_turn.len() == 1 {
            ids.push(end_of_turn[0]);
        }
    }
    ids.sort_unstable();
    ids.dedup();
    ids
}
