// Image recognition
pub const VISION_PORN: &str = "/fcgi-bin/vision/vision_porn";
pub const IMAGE_TERRORISM: &str = "/fcgi-bin/image/image_terrorism";
pub const VISION_SCENER: &str = "/fcgi-bin/vision/vision_scener";
pub const VISION_OBJECTR: &str = "/fcgi-bin/vision/vision_objectr";
pub const IMAGE_TAG: &str = "/fcgi-bin/image/image_tag";
pub const VISION_IMGIDENTIFY: &str = "/fcgi-bin/vision/vision_imgidentify";
pub const VISION_IMGTOTEXT: &str = "/fcgi-bin/vision/vision_imgtotext";
pub const IMAGE_FUZZY: &str = "/fcgi-bin/image/image_fuzzy";
pub const IMAGE_FOOD: &str = "/fcgi-bin/image/image_food";

// OCR
pub const OCR_IDCARD: &str = "/fcgi-bin/ocr/ocr_idcardocr";
pub const OCR_BUSINESS_CARD: &str = "/fcgi-bin/ocr/ocr_bcocr";
pub const OCR_DRIVER_LICENSE: &str = "/fcgi-bin/ocr/ocr_driverlicenseocr";
pub const OCR_BIZ_LICENSE: &str = "/fcgi-bin/ocr/ocr_bizlicenseocr";
pub const OCR_CREDIT_CARD: &str = "/fcgi-bin/ocr/ocr_creditcardocr";
pub const OCR_GENERAL: &str = "/fcgi-bin/ocr/ocr_generalocr";
pub const OCR_PLATE: &str = "/fcgi-bin/ocr/ocr_plateocr";
pub const OCR_HANDWRITING: &str = "/fcgi-bin/ocr/ocr_handwritingocr";

// Image special effects
pub const PTU_FACE_COSMETIC: &str = "/fcgi-bin/ptu/ptu_facecosmetic";
pub const PTU_FACE_DECORATION: &str = "/fcgi-bin/ptu/ptu_facedecoration";
pub const PTU_IMG_FILTER: &str = "/fcgi-bin/ptu/ptu_imgfilter";
pub const VISION_IMG_FILTER: &str = "/fcgi-bin/vision/vision_imgfilter";
pub const PTU_FACE_MERGE: &str = "/fcgi-bin/ptu/ptu_facemerge";
pub const PTU_FACE_STICKER: &str = "/fcgi-bin/ptu/ptu_facesticker";
pub const PTU_FACE_AGE: &str = "/fcgi-bin/ptu/ptu_faceage";

// NLP
pub const NLP_WORDSEG: &str = "/fcgi-bin/nlp/nlp_wordseg";
pub const NLP_WORDPOS: &str = "/fcgi-bin/nlp/nlp_wordpos";
pub const NLP_WORDNER: &str = "/fcgi-bin/nlp/nlp_wordner";
pub const NLP_WORDSYN: &str = "/fcgi-bin/nlp/nlp_wordsyn";
pub const NLP_WORDCOM: &str = "/fcgi-bin/nlp/nlp_wordcom";
pub const NLP_TEXTPOLAR: &str = "/fcgi-bin/nlp/nlp_textpolar";
pub const NLP_TEXTCHAT: &str = "/fcgi-bin/nlp/nlp_textchat";
pub const NLP_TEXTTRANSLATE: &str = "/fcgi-bin/nlp/nlp_texttranslate";
pub const NLP_TEXTDETECT: &str = "/fcgi-bin/nlp/nlp_textdetect";
pub const NLP_IMAGETRANSLATE: &str = "/fcgi-bin/nlp/nlp_imagetranslate";

// Speech
pub const AAI_TTS: &str = "/fcgi-bin/aai/aai_tts";
pub const AAI_TTA: &str = "/fcgi-bin/aai/aai_tta";
pub const AAI_ASR: &str = "/fcgi-bin/aai/aai_asr";
pub const AAI_ASRS: &str = "/fcgi-bin/aai/aai_asrs";
pub const AAI_WXASRS: &str = "/fcgi-bin/aai/aai_wxasrs";
